//! Integration tests for module lifecycle and the toolkit set
//!
//! Real toolkit libraries are not assumed to be installed. Module tests bind
//! small tables against libc and libm; toolkit tests point modules at
//! candidates that are either missing or lack the toolkit's exports.

use gbind::config::Config;
use gbind::module::{BoundModule, Module};
use gbind::toolkit::{Toolkit, MODULE_NAMES};
use sdk::errors::{BindError, BindErrorExt};
use sdk::types::{BindPolicy, ModuleStatus};
use std::ffi::{c_char, c_double, c_int};

gbind::symbol_table! {
    pub unsafe struct MathSyms for "math" in ["libm.so.6"] {
        required floor: unsafe extern "C" fn(c_double) -> c_double = "floor",
        required pow: unsafe extern "C" fn(c_double, c_double) -> c_double = "pow",
    }
}

gbind::symbol_table! {
    pub unsafe struct CSyms for "c" in ["libc.so.6"] {
        required abs: unsafe extern "C" fn(c_int) -> c_int = "abs",
        required strlen: unsafe extern "C" fn(*const c_char) -> usize = "strlen",
        optional missing: unsafe extern "C" fn() = "gbind_absent_export",
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_closing_one_module_leaves_other_usable() {
    let mut math: Module<MathSyms> = Module::new();
    let mut c: Module<CSyms> = Module::new();

    math.initialize().expect("libm binds");
    c.initialize().expect("libc binds");

    math.close().expect("close math");
    assert_eq!(math.status(), ModuleStatus::Released);
    assert!(matches!(math.table(), Err(BindError::NotInitialized(_))));

    let table = c.table().expect("libc still bound");
    let abs = unsafe { table.abs.get() }.expect("abs bound");
    assert_eq!(unsafe { abs(-7) }, 7);
    let strlen = unsafe { table.strlen.get() }.expect("strlen bound");
    assert_eq!(unsafe { strlen(b"gbind\0".as_ptr().cast()) }, 5);
}

#[cfg(target_os = "linux")]
#[test]
fn test_optional_symbol_missing_still_binds() {
    let mut c: Module<CSyms> = Module::new();
    let table = c.initialize().expect("libc binds");
    assert!(!table.missing.is_bound());
    assert!(unsafe { table.missing.as_option() }.is_none());

    let report = c.report().expect("report available while bound");
    assert_eq!(report.unresolved, vec!["gbind_absent_export"]);
    assert!(report.missing_required.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_reinitialize_after_close() {
    let mut math: Module<MathSyms> = Module::new();

    for _ in 0..3 {
        let table = math.initialize().expect("libm binds");
        let pow = unsafe { table.pow.get() }.expect("pow bound");
        assert_eq!(unsafe { pow(2.0, 10.0) }, 1024.0);
        math.close().expect("close");
        math.close().expect("second close is a no-op");
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_bound_module_close_consumes() {
    let bound = BoundModule::<MathSyms>::bind_default(BindPolicy::default()).expect("libm binds");
    assert_eq!(bound.library_name(), "libm.so.6");
    assert!(bound.report().is_complete());
    let floor = unsafe { bound.table().floor.get() }.expect("floor bound");
    assert_eq!(unsafe { floor(-0.5) }, -1.0);
    bound.close().expect("close");
}

#[test]
fn test_candidate_override() {
    let mut math: Module<MathSyms> =
        Module::new().with_candidates(vec!["libgbind-missing.so".to_string()]);
    match math.initialize() {
        Err(BindError::LibraryNotFound { candidates, .. }) => {
            assert_eq!(candidates, vec!["libgbind-missing.so"]);
        }
        other => panic!("Expected LibraryNotFound, got {:?}", other.err()),
    }
}

fn all_missing_config(required: bool) -> Config {
    let mut toml = String::new();
    for name in MODULE_NAMES {
        toml.push_str(&format!(
            "[modules.{name}]\ncandidates = [\"libgbind-missing-{name}.so\"]\nrequired = {required}\n\n"
        ));
    }
    Config::from_toml_str(&toml).expect("valid config")
}

#[test]
fn test_toolkit_optional_modules_all_missing() {
    let mut toolkit = Toolkit::from_config(&all_missing_config(false)).expect("toolkit");
    let outcomes = toolkit.initialize().expect("optional failures are soft");

    let names: Vec<&str> = outcomes.iter().map(|o| o.name).collect();
    assert_eq!(names, MODULE_NAMES);
    assert!(outcomes.iter().all(|o| !o.is_bound() && !o.required));
    assert!(toolkit
        .modules()
        .iter()
        .all(|m| m.status() == ModuleStatus::Uninitialized));
}

#[test]
fn test_toolkit_required_module_missing_is_fatal() {
    let mut toolkit = Toolkit::from_config(&all_missing_config(true)).expect("toolkit");
    let err = toolkit.initialize().expect_err("glib is required");

    match &err {
        BindError::LibraryNotFound { module, .. } => assert_eq!(module, "glib"),
        other => panic!("Expected LibraryNotFound, got {:?}", other),
    }
    assert!(!err.is_recoverable());
    assert!(!err.user_hint().is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_toolkit_wrong_library_is_rejected_when_strict() {
    // libm opens fine but exports none of GLib's symbols
    let config = Config::from_toml_str(
        r#"
[modules.glib]
candidates = ["libm.so.6"]
"#,
    )
    .expect("valid config");

    let mut toolkit = Toolkit::from_config(&config).expect("toolkit");
    match toolkit.initialize_only(&["glib"]) {
        Err(BindError::SymbolUnresolved { module, names }) => {
            assert_eq!(module, "glib");
            assert!(names.contains(&"g_print".to_string()));
        }
        other => panic!("Expected SymbolUnresolved, got {:?}", other),
    }
    assert_eq!(toolkit.glib.status(), ModuleStatus::Uninitialized);
}

#[cfg(target_os = "linux")]
#[test]
fn test_toolkit_lenient_binding_keeps_partial_table() {
    let config = Config::from_toml_str(
        r#"
[binding]
strict = false

[modules.glib]
candidates = ["libm.so.6"]
"#,
    )
    .expect("valid config");

    let mut toolkit = Toolkit::from_config(&config).expect("toolkit");
    let outcomes = toolkit.initialize_only(&["glib"]).expect("lenient bind");
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_bound());

    let glib = toolkit.glib.table().expect("glib bound");
    assert!(!glib.print.is_bound());
    assert!(matches!(
        unsafe { glib.print.get() },
        Err(BindError::SymbolUnbound { .. })
    ));

    toolkit.close().expect("close");
    assert_eq!(toolkit.glib.status(), ModuleStatus::Released);
}
