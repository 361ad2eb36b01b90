#![allow(dead_code)]

pub mod headless;
pub mod mapreview_env;
