#![allow(dead_code)]

use debruijn::{Category, Error, Interpreter, Options};

/// Parse and evaluate `input` with default options, rendering both results.
pub fn run(input: &str) -> Result<(String, String), Error> {
    run_with(input, Options::default())
}

pub fn run_with(input: &str, options: Options) -> Result<(String, String), Error> {
    let interpreter = Interpreter::new(options);
    let run = interpreter.run(input)?;
    Ok((run.term.to_string(), run.value.to_string()))
}

/// What the CLI prints on success.
pub fn transcript(input: &str) -> String {
    let (term, value) = run(input).unwrap_or_else(|e| panic!("{:?} failed: {}", input, e));
    format!("parsed:\n{}\nevaled:\n{}\n", term, value)
}

pub fn category(input: &str) -> Category {
    match run(input) {
        Ok((_, value)) => panic!("{:?} evaluated to {} but should fail", input, value),
        Err(e) => e.category(),
    }
}

/// Run `f` on a thread with a 256 MiB stack, for deeply recursive programs.
pub fn on_large_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(f)
        .expect("failed to spawn thread")
        .join()
        .expect("thread panicked")
}

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        parsed: $parsed:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let (parsed, value) = cases::run($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
            pretty_assertions::assert_eq!(parsed, $parsed, "parsed");
            pretty_assertions::assert_eq!(value, $value, "value");
        }
    };
    (
        $name:ident,
        input: $input:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let (_, value) = cases::run($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
            pretty_assertions::assert_eq!(value, $value);
        }
    };
    (
        $name:ident,
        input: $input:expr,
        error: $category:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::category($input), $category);
        }
    };
}
