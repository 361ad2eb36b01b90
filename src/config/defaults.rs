pub(super) const MIN_DEBOUNCE_MS: u64 = 50;
pub(super) const MAX_DEBOUNCE_MS: u64 = 10_000;
pub(super) const MAX_UNDO_LIMIT: usize = 10_000;

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_accept_limit() -> usize {
    50
}

pub(super) fn default_notice_ms() -> u64 {
    4_000
}

pub(super) fn default_background_debounce_ms() -> u64 {
    1_000
}

pub(super) fn default_layer_debounce_ms() -> u64 {
    500
}

pub(super) fn default_undo_limit() -> usize {
    500
}

pub(super) fn default_building_providers() -> Vec<String> {
    vec!["Facebook".to_string(), "Microsoft".to_string()]
}

pub(super) fn clamp_accept_limit(limit: usize) -> usize {
    limit.max(1)
}

pub(super) fn clamp_debounce_ms(ms: u64) -> u64 {
    ms.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS)
}

pub(super) fn clamp_undo_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_UNDO_LIMIT)
}
