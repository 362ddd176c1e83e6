use std::any::Any;

use crate::error::{PlotError, Result};
use crate::history::HistorySource;
use crate::utils::{self, load_all, Export, PlotHistoryFn, SummarizeHistoryFn, UtilityModule};

type GreetFn = fn() -> &'static str;

fn greet() -> &'static str {
    "hello"
}

fn farewell() -> &'static str {
    "bye"
}

// Public but never listed in an export list
pub fn unlisted() -> &'static str {
    "hidden"
}

static GREET: GreetFn = greet;
static FAREWELL: GreetFn = farewell;
static ANSWER: u32 = 42;

static GREETINGS: UtilityModule = UtilityModule {
    name: "greetings",
    exports: &[Export::new("greet", &GREET)],
};

static PARTINGS: UtilityModule = UtilityModule {
    name: "partings",
    exports: &[Export::new("farewell", &FAREWELL)],
};

static EMPTY: UtilityModule = UtilityModule {
    name: "empty",
    exports: &[],
};

static CLASHING: UtilityModule = UtilityModule {
    name: "clashing",
    exports: &[Export::new("greet", &ANSWER)],
};

#[test]
fn test_listed_exports_resolve() {
    let namespace = load_all(&[&GREETINGS, &PARTINGS]).unwrap();

    let greet = namespace.get::<GreetFn>("greet").unwrap();
    let farewell = namespace.get::<GreetFn>("farewell").unwrap();
    assert_eq!(greet(), "hello");
    assert_eq!(farewell(), "bye");
    assert!(!namespace.contains("unlisted"));
    assert_eq!(unlisted(), "hidden");
    assert_eq!(namespace.len(), 2);
}

#[test]
fn test_module_of_and_sorted_names() {
    let namespace = load_all(&[&PARTINGS, &GREETINGS]).unwrap();
    assert_eq!(namespace.module_of("greet"), Some("greetings"));
    assert_eq!(namespace.module_of("farewell"), Some("partings"));
    let names: Vec<&str> = namespace.names().collect();
    assert_eq!(names, vec!["farewell", "greet"]);
}

#[test]
fn test_get_with_wrong_type_is_none() {
    let namespace = load_all(&[&GREETINGS]).unwrap();
    assert!(namespace.get::<u32>("greet").is_none());
    assert!(namespace.get::<GreetFn>("missing").is_none());
}

#[test]
fn test_module_without_exports_fails() {
    let err = load_all(&[&GREETINGS, &EMPTY]).unwrap_err();
    assert_eq!(
        err,
        PlotError::ModuleLoad {
            module: "empty".to_string(),
            reason: "module declares no public exports".to_string(),
        }
    );
}

#[test]
fn test_name_collision_names_the_later_module() {
    // "clashing" sorts before "greetings", so greetings is the offender
    match load_all(&[&GREETINGS, &CLASHING]) {
        Err(PlotError::ModuleLoad { module, reason }) => {
            assert_eq!(module, "greetings");
            assert!(reason.contains("clashing"));
        }
        other => panic!("expected module load error, got {:?}", other.map(|ns| ns.len())),
    }
}

#[test]
fn test_export_holds_any_static_item() {
    let export = Export::new("answer", &ANSWER);
    let item: &dyn Any = export.item;
    assert_eq!(item.downcast_ref::<u32>(), Some(&42));
}

#[test]
fn test_builtin_namespace() {
    let namespace = utils::namespace().unwrap();

    assert!(namespace.get::<PlotHistoryFn>("plot_history").is_some());
    assert_eq!(namespace.module_of("summarize_history"), Some("summary"));

    let summarize = namespace.get::<SummarizeHistoryFn>("summarize_history").unwrap();
    let record = history! { "loss" => [1.0, 0.5] };
    let source: &dyn HistorySource = &record;
    assert!(summarize(source).contains("loss: Final=0.5000"));
}

#[test]
fn test_builtin_plot_history_reports_bad_skip() {
    let namespace = utils::namespace().unwrap();
    let plot = namespace.get::<PlotHistoryFn>("plot_history").unwrap();
    let record = history! { "loss" => [1.0, 0.5] };
    let source: &dyn HistorySource = &record;

    let result: Result<()> = plot(source, 2);
    assert!(matches!(result, Err(PlotError::SkipOutOfRange { .. })));
}
