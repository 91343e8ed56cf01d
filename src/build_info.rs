//! Build commit and date, embedded by build.rs for `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
