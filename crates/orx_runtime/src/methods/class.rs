//! Methods every class object answers.

use orx_condition::RexxResult;
use orx_core::{ClassId, ObjectId};

use super::common::*;
use crate::Runtime;
use crate::core::ObjectKind;
use crate::method::Method;

fn class_list(rt: &mut Runtime, classes: &[ClassId]) -> RexxResult<ObjectId> {
    let names = {
        let registry = rt.registry.read();
        classes
            .iter()
            .map(|&c| registry.id(c).map(str::to_string))
            .collect::<RexxResult<Vec<_>>>()?
    };
    Ok(rt.new_string(&names.join(" ")))
}

fn optional_class(rt: &Runtime, args: &[ObjectId], index: usize) -> RexxResult<Option<ClassId>> {
    arg(args, index).map(|value| expect_class(rt, value)).transpose()
}

pub(crate) fn class_new(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    let class = expect_class(rt, recv)?;
    let object = rt.new_object(class)?;
    rt.gc_temp_roots.push(object);
    let init = rt.send(object, "INIT", args);
    rt.gc_temp_roots.pop();
    init?;
    Ok(object)
}

pub(crate) fn class_id(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let name = rt.registry.read().id(class)?.to_string();
    Ok(rt.new_string(&name))
}

pub(crate) fn class_subclass(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 2)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    let meta = optional_class(rt, args, 1)?;
    let created = rt.subclass(class, &name, meta)?;
    rt.class_object(created)
}

pub(crate) fn class_mixinclass(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 2)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    let meta = optional_class(rt, args, 1)?;
    let created = rt.mixinclass(class, &name, meta)?;
    rt.class_object(created)
}

pub(crate) fn class_inherit(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 2)?;
    let class = expect_class(rt, recv)?;
    let mixin = expect_class(rt, required_arg(args, 0)?)?;
    let position = optional_class(rt, args, 1)?;
    rt.registry.write().inherit(class, mixin, position)?;
    Ok(rt.nil())
}

pub(crate) fn class_uninherit(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let class = expect_class(rt, recv)?;
    let mixin = expect_class(rt, required_arg(args, 0)?)?;
    rt.registry.write().uninherit(class, mixin)?;
    Ok(rt.nil())
}

pub(crate) fn class_base_class(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let base = rt.registry.read().base_class(class)?;
    rt.class_object(base)
}

pub(crate) fn class_meta_class(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let meta = rt.registry.read().meta_class(class)?;
    rt.class_object(meta)
}

pub(crate) fn class_superclasses(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let supers = rt.registry.read().super_classes(class)?;
    class_list(rt, &supers)
}

pub(crate) fn class_subclasses(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let subs = rt.registry.read().sub_classes(class).to_vec();
    class_list(rt, &subs)
}

pub(crate) fn class_query_mixin(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let class = expect_class(rt, recv)?;
    let mixin = rt.registry.read().query_mixin_class(class)?;
    Ok(bool_result(rt, mixin))
}

pub(crate) fn class_is_subclass_of(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let class = expect_class(rt, recv)?;
    let other = expect_class(rt, required_arg(args, 0)?)?;
    let result = rt.registry.read().is_subclass_of(class, other)?;
    Ok(bool_result(rt, result))
}

/// `DEFINE(name)` occludes `name`; with a method object or a string the
/// method is added (a string defines a method answering that string).
pub(crate) fn class_define(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 2)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    let method = match arg(args, 1) {
        None => None,
        Some(value) => match &rt.object(value)?.kind {
            ObjectKind::Method(method) => Some(method.clone()),
            _ => Some(Method::constant(name.as_str(), &rt.string_value(value)?)),
        },
    };
    rt.registry.write().define_method(class, &name, method)?;
    Ok(rt.nil())
}

pub(crate) fn class_delete(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    rt.registry.write().delete_method(class, &name)?;
    Ok(rt.nil())
}

/// The method object instances would run for `name`; `nil` when occluded.
pub(crate) fn class_method(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let class = expect_class(rt, recv)?;
    let name = string_arg(rt, args, 0)?;
    let method = rt.registry.read().method(class, &name)?;
    match method {
        Some(method) => rt.new_method_object(method),
        None => Ok(rt.nil()),
    }
}
