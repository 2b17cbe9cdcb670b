#![allow(dead_code)]

use orx_runtime::{ObjectId, Runtime, RuntimeConfig};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn runtime() -> Runtime {
    init_tracing();
    Runtime::new().unwrap()
}

pub fn runtime_with(config: RuntimeConfig) -> Runtime {
    init_tracing();
    Runtime::with_config(config).unwrap()
}

pub fn text(rt: &Runtime, id: ObjectId) -> String {
    rt.string_value(id).unwrap()
}

/// Sends `message` with string arguments and returns the result's text.
pub fn send_text(rt: &mut Runtime, receiver: ObjectId, message: &str, args: &[&str]) -> String {
    let args: Vec<ObjectId> = args.iter().map(|a| rt.new_string(a)).collect();
    let result = rt.send(receiver, message, &args).unwrap();
    text(rt, result)
}
