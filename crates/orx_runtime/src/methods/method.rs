use orx_condition::RexxResult;
use orx_core::ObjectId;

use super::common::*;
use crate::Runtime;
use crate::core::ObjectKind;
use crate::method::{Method, MethodBody};

/// Class side of `Method`: `NEW(name, text)` makes a method answering
/// `text`, as an instance of the receiving class.
pub(crate) fn method_new(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 2, 2)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    let text = string_arg(rt, args, 1)?;
    let method = Method::constant(name.as_str(), &text);
    rt.alloc_instance(class, ObjectKind::Method(method))
}

pub(crate) fn method_name(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let method = expect_method(rt, recv)?;
    Ok(rt.new_string(method.name().as_str()))
}

/// The answered text of a constant method; empty for natives.
pub(crate) fn method_source(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let method = expect_method(rt, recv)?;
    let source = match method.body() {
        MethodBody::Native(_) => "",
        MethodBody::Constant(text) => text.as_ref(),
    };
    Ok(rt.new_string(source))
}
