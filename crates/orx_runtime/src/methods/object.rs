use orx_condition::RexxResult;
use orx_core::ObjectId;

use super::common::*;
use crate::Runtime;

pub(crate) fn object_class(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = rt.class_of(recv)?;
    rt.class_object(class)
}

pub(crate) fn object_string(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let text = rt.string_value(recv)?;
    Ok(rt.new_string(&text))
}

pub(crate) fn object_default_name(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let name = rt.default_name(recv)?;
    Ok(rt.new_string(&name))
}

pub(crate) fn object_has_method(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let name = string_arg(rt, args, 0)?;
    let found = rt.responds_to(recv, &name)?;
    Ok(bool_result(rt, found))
}

/// Default initializer run by `NEW`.
pub(crate) fn object_init(rt: &mut Runtime, _recv: ObjectId, _args: &[ObjectId]) -> RexxResult<ObjectId> {
    Ok(rt.nil())
}

pub(crate) fn object_identical(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let other = args[0];
    Ok(bool_result(rt, recv == other))
}

pub(crate) fn object_not_identical(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let other = args[0];
    Ok(bool_result(rt, recv != other))
}
