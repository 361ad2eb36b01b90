mod hotkey_flow;
