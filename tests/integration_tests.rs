//! Integration tests for formatting, built-in functions and dictionaries

use pretty_assertions::assert_eq;
use texting::{Mode, Text};

fn dictionary_text() -> Text {
    let mut text = Text::new();
    text.add_dictionary([
        ("key", "KEY"),
        ("variable", "VARIABLE {0}"),
        ("relation", "RELATION {key}"),
        ("relation_variable", "RELATION {variable}"),
        ("fn_count", "{count(0,variable, variables, variables)}"),
        ("fn_gender", "{gender(0,His,Her,His/Her)} variable"),
    ]);
    text
}

#[test]
fn test_text_without_variables() {
    assert_eq!(Text::new().format("Test test test", &[]), "Test test test");
}

#[test]
fn test_one_variable() {
    assert_eq!(Text::new().format("Test test {0}", &[&"test"]), "Test test test");
}

#[test]
fn test_one_variable_without_argument() {
    assert_eq!(Text::new().format("Test test {0}", &[]), "Test test ");
}

#[test]
fn test_two_variables() {
    assert_eq!(
        Text::new().format("Test {0} {1}", &[&"test", &"test"]),
        "Test test test"
    );
}

#[test]
fn test_two_variables_reversed() {
    assert_eq!(
        Text::new().format("Test {1} {0}", &[&"first", &"second"]),
        "Test second first"
    );
}

#[test]
fn test_two_variables_not_set() {
    assert_eq!(
        Text::new().format("First parameter: {0}; Second parameter: {1};", &[]),
        "First parameter: ; Second parameter: ;"
    );
}

#[test]
fn test_count_function() {
    let text = Text::new();
    let template = "{count(0,test,tests,tests)}";
    assert_eq!(text.format(template, &[&0]), "0 tests");
    assert_eq!(text.format(template, &[&1]), "1 test");
    assert_eq!(text.format(template, &[&2]), "2 tests");
    assert_eq!(text.format(template, &[&5]), "5 tests");
    assert_eq!(text.format("{count(0,test,testify,tests)}", &[&4]), "4 testify");
}

#[test]
fn test_multiple_count_functions() {
    assert_eq!(
        Text::new().format(
            "{count(0,test,tests,tests)} {count(1,test,tests,tests)} {count(2,test,tests,tests)}",
            &[&1, &2, &4]
        ),
        "1 test 2 tests 4 tests"
    );
}

#[test]
fn test_gender_function() {
    let text = Text::new();
    let template = "{gender(0,He,She,He/She)} is trying to learn rust";
    assert_eq!(text.format(template, &[&"male"]), "He is trying to learn rust");
    assert_eq!(text.format(template, &[&"female"]), "She is trying to learn rust");
    assert_eq!(text.format(template, &[&"both"]), "He/She is trying to learn rust");
    assert_eq!(text.format(template, &[]), "He/She is trying to learn rust");
}

#[test]
fn test_multiple_gender_functions() {
    assert_eq!(
        Text::new().format(
            "{gender(0,He,She,He/She)} has to read {gender(1,his,her,his/her)} book",
            &[&"male", &"female"]
        ),
        "He has to read her book"
    );
}

#[test]
fn test_count_and_gender_functions() {
    assert_eq!(
        Text::new().format(
            "{gender(0,He,She,He/She)} is learning {count(1,language,languages,languages)}",
            &[&"male", &2]
        ),
        "He is learning 2 languages"
    );
}

#[test]
fn test_invalid_function() {
    assert_eq!(Text::new().format("{test(0)}", &[&"test"]), "");
}

#[test]
fn test_invalid_function_keeps_rest_of_template() {
    assert_eq!(
        Text::new().format("a {test(0)} b {0}", &[&"c"]),
        "a  b c"
    );
}

#[test]
fn test_custom_function_with_default() {
    let mut text = Text::new();
    text.add_function("stamp", |params: &[String]| {
        match params.first().map(String::as_str) {
            Some("") | None => "2018-02-22".to_string(),
            Some(day) => day.to_string(),
        }
    });
    assert_eq!(text.format("{stamp()}", &[]), "2018-02-22");
    assert_eq!(text.format("{stamp(2018-02-23)}", &[]), "2018-02-23");
}

#[test]
fn test_builtins_can_be_overridden() {
    let mut text = Text::new();
    text.add_function("count", |params: &[String]| format!("#{}", params[0]));
    assert_eq!(text.format("{count(0,a,b,c)}", &[&7]), "#7");
}

#[test]
fn test_get_from_missing_key() {
    let mut text = dictionary_text();
    text.set_mode(Mode::Production);
    assert_eq!(text.get("non_existing", &[]), "");
    text.set_mode(Mode::Dev);
    assert_eq!(text.get("non_existing", &[]), "[non_existing]");
}

#[test]
fn test_get_values() {
    let text = dictionary_text();
    assert_eq!(text.get("key", &[]), "KEY");
    assert_eq!(text.get("variable", &[&5]), "VARIABLE 5");
    assert_eq!(text.get("relation", &[]), "RELATION KEY");
    assert_eq!(text.get("relation_variable", &[&6]), "RELATION VARIABLE 6");
    assert_eq!(text.get("fn_count", &[&3]), "3 variables");
    assert_eq!(text.get("fn_gender", &[&"female"]), "Her variable");
}

#[test]
fn test_format_with_dictionary_key() {
    assert_eq!(
        dictionary_text().format("The key is {key}", &[]),
        "The key is KEY"
    );
}

#[test]
fn test_custom_dictionary() {
    let mut text = dictionary_text();
    text.add_named_dictionary("custom", [("key", "key")]);
    text.set_dictionary("custom");
    assert_eq!(text.get("key", &[]), "key");
    assert_eq!(text.get("variable", &[&5]), "VARIABLE 5");
    assert_eq!(text.get("relation", &[]), "RELATION key");
    assert_eq!(text.get("relation_variable", &[&6]), "RELATION VARIABLE 6");
    assert_eq!(text.get("fn_count", &[&3]), "3 variables");
    assert_eq!(text.get("fn_gender", &[&"female"]), "Her variable");
}

#[test]
fn test_chained_setup() {
    let mut text = Text::empty();
    text.add_dictionary([("hello", "Hello {shout(0)}")])
        .add_function("shout", |params: &[String]| params[0].to_uppercase())
        .set_mode(Mode::Production);
    assert_eq!(text.get("hello", &[&"world"]), "Hello WORLD");
}

#[test]
fn test_shared_instance() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let text = Arc::new(Mutex::new(dictionary_text()));
    let worker = {
        let text = Arc::clone(&text);
        thread::spawn(move || {
            let text = text.lock().expect("lock");
            let out = text.get("variable", &[&1]);
            out
        })
    };
    assert_eq!(worker.join().expect("thread"), "VARIABLE 1");
}
