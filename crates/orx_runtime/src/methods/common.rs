use std::sync::Arc;

use orx_condition::{ConditionKind, RexxError, RexxResult};
use orx_core::{ClassId, ObjectId};

use crate::Runtime;
use crate::core::ObjectKind;
use crate::method::Method;

/// 验证参数数量是否在指定范围内
pub fn validate_arity(args: &[ObjectId], min: usize, max: usize) -> RexxResult<()> {
    if args.len() < min || args.len() > max {
        return Err(err(ConditionKind::ArgumentCountMismatch {
            expected_min: min,
            expected_max: max,
            actual: args.len(),
        }));
    }
    Ok(())
}

/// 生成错误信息
pub fn err(kind: ConditionKind) -> RexxError {
    RexxError::new(kind)
}

/// 取可选参数；`nil` 视为省略
pub fn arg(args: &[ObjectId], index: usize) -> Option<ObjectId> {
    args.get(index).copied().filter(|id| !id.is_nil())
}

/// 取必需参数
pub fn required_arg(args: &[ObjectId], index: usize) -> RexxResult<ObjectId> {
    arg(args, index).ok_or_else(|| err(ConditionKind::MissingArgument(index + 1)))
}

/// 布尔结果以字符串 "1" / "0" 表示
pub fn bool_result(rt: &mut Runtime, value: bool) -> ObjectId {
    rt.new_string(if value { "1" } else { "0" })
}

/// 验证值是否为类对象
pub fn expect_class(rt: &Runtime, value: ObjectId) -> RexxResult<ClassId> {
    match rt.as_class(value) {
        Some(class) => Ok(class),
        None => Err(err(ConditionKind::InvalidObject {
            expected: "class",
            actual: rt.string_value(value)?,
        })),
    }
}

/// 验证值是否为方法对象
pub fn expect_method(rt: &Runtime, value: ObjectId) -> RexxResult<Arc<Method>> {
    match &rt.object(value)?.kind {
        ObjectKind::Method(method) => Ok(method.clone()),
        _ => Err(err(ConditionKind::InvalidObject {
            expected: "method",
            actual: rt.string_value(value)?,
        })),
    }
}

/// 取非负整数参数（位置从 1 开始计数）
pub fn whole_arg(rt: &Runtime, args: &[ObjectId], index: usize) -> RexxResult<Option<usize>> {
    let Some(value) = arg(args, index) else {
        return Ok(None);
    };
    match rt.try_number(value)?.and_then(|n| n.long_value(None)) {
        Some(n) if n >= 0 => Ok(Some(n as usize)),
        _ => Err(err(ConditionKind::InvalidNonNegative {
            position: index + 1,
            value: rt.string_value(value)?,
        })),
    }
}

/// 取参数的字符串值
pub fn string_arg(rt: &Runtime, args: &[ObjectId], index: usize) -> RexxResult<String> {
    rt.string_value(required_arg(args, index)?)
}
