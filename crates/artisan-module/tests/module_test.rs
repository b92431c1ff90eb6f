use artisan_core::identity::{IdentityConfig, ProjectIdentity};
use artisan_core::templates::{embedded, renderer::TemplateRenderer, tokens};
use artisan_module::{Calculator, Doubling, Module};

fn identity(name: &str) -> ProjectIdentity {
    ProjectIdentity::new(name).unwrap()
}

#[test]
fn test_basic_operation() {
    let module = Module::new(&identity("Calculator"));
    assert_eq!(module.perform_operation(21), 42);
}

#[test]
fn test_welcome_message() {
    let module = Module::new(&identity("Calculator"));
    assert_eq!(module.welcome_message(), "Welcome to Calculator!");
}

#[test]
fn test_welcome_message_uses_decorated_name() {
    let mut config = IdentityConfig::new("Parser");
    config.prefix = "Json".into();
    let module = Module::new(&ProjectIdentity::resolve(&config).unwrap());
    assert_eq!(module.name(), "JsonParser");
    assert_eq!(module.welcome_message(), "Welcome to JsonParser!");
}

#[test]
fn test_custom_calculator() {
    struct Square;

    impl Calculator for Square {
        fn calculate(&self, input: i32) -> i32 {
            input * input
        }
    }

    let module = Module::with_calculator(&identity("Squarer"), Square);
    assert_eq!(module.perform_operation(7), 49);
    assert_eq!(module.welcome_message(), "Welcome to Squarer!");
}

#[test]
fn test_closure_calculator() {
    let module = Module::with_calculator(&identity("Negator"), |x: i32| -x);
    assert_eq!(module.perform_operation(5), -5);
}

#[test]
fn test_matches_rendered_template_greeting() {
    let id = identity("MyCalcEngine");
    let source = TemplateRenderer::new()
        .render(embedded::MODULE_SOURCE, &tokens::replacements(&id))
        .unwrap();

    let module = Module::new(&id);
    let literal = format!("String::from(\"{}\")", module.welcome_message());
    assert!(source.contains(&literal), "rendered source lacks {literal}");
}

#[test]
fn test_module_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Module>();
    assert_send_sync::<Module<Doubling>>();
    assert_send_sync::<Doubling>();
}
