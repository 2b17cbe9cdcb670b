//! String methods: arithmetic, comparison and the numeric built-ins.

use std::cmp::Ordering;

use orx_condition::RexxResult;
use orx_core::ObjectId;
use orx_number::{ArithOp, NumberString, NumericSettings};

use super::common::*;
use crate::Runtime;

fn arithmetic(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId], op: ArithOp) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let settings = rt.numeric();
    let left = rt.number_value(recv)?;
    let right = rt.number_value(required_arg(args, 0)?)?;
    let result = left.operate(op, &right, &settings)?;
    tracing::trace!(op = op.symbol(), result = result.string_value(), "arithmetic");
    Ok(rt.new_number(result))
}

pub(crate) fn string_plus(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    if args.is_empty() {
        let settings = rt.numeric();
        let value = rt.number_value(recv)?.round_to(&settings)?;
        return Ok(rt.new_number(value));
    }
    arithmetic(rt, recv, args, ArithOp::Plus)
}

pub(crate) fn string_minus(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    if args.is_empty() {
        let settings = rt.numeric();
        let value = rt.number_value(recv)?.negate(&settings)?;
        return Ok(rt.new_number(value));
    }
    arithmetic(rt, recv, args, ArithOp::Minus)
}

pub(crate) fn string_multiply(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    arithmetic(rt, recv, args, ArithOp::Multiply)
}

pub(crate) fn string_divide(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    arithmetic(rt, recv, args, ArithOp::Divide)
}

pub(crate) fn string_integer_divide(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    arithmetic(rt, recv, args, ArithOp::IntegerDivide)
}

pub(crate) fn string_remainder(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    arithmetic(rt, recv, args, ArithOp::Remainder)
}

pub(crate) fn string_power(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    arithmetic(rt, recv, args, ArithOp::Power)
}

/// Numeric comparison when both sides are numbers, otherwise a comparison
/// of the blank-stripped strings with the shorter padded by blanks.
fn compare(rt: &Runtime, recv: ObjectId, other: ObjectId) -> RexxResult<Ordering> {
    if let (Some(left), Some(right)) = (rt.try_number(recv)?, rt.try_number(other)?) {
        return left.comp(&right, &rt.numeric());
    }
    let left = rt.bytes_value(recv)?;
    let right = rt.bytes_value(other)?;
    let left = strip_blanks(&left);
    let right = strip_blanks(&right);
    let n = left.len().max(right.len());
    let padded = |s: &[u8], i: usize| s.get(i).copied().unwrap_or(b' ');
    Ok((0..n)
        .map(|i| padded(left, i).cmp(&padded(right, i)))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal))
}

fn strip_blanks(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != b' ').map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn comparison(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
    test: fn(Ordering) -> bool,
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let ordering = compare(rt, recv, args[0])?;
    Ok(bool_result(rt, test(ordering)))
}

pub(crate) fn string_equal(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_eq)
}

pub(crate) fn string_not_equal(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_ne)
}

pub(crate) fn string_less(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_lt)
}

pub(crate) fn string_greater(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_gt)
}

pub(crate) fn string_less_equal(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_le)
}

pub(crate) fn string_greater_equal(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    comparison(rt, recv, args, Ordering::is_ge)
}

pub(crate) fn string_strict_equal(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let same = rt.bytes_value(recv)? == rt.bytes_value(args[0])?;
    Ok(bool_result(rt, same))
}

pub(crate) fn string_strict_not_equal(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
) -> RexxResult<ObjectId> {
    validate_arity(args, 1, 1)?;
    let same = rt.bytes_value(recv)? == rt.bytes_value(args[0])?;
    Ok(bool_result(rt, !same))
}

pub(crate) fn string_abs(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let settings = rt.numeric();
    let value = rt.number_value(recv)?.abs(&settings)?;
    Ok(rt.new_number(value))
}

pub(crate) fn string_sign(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let settings = rt.numeric();
    let sign = rt.number_value(recv)?.round_to(&settings)?.sign();
    let value = NumberString::from_i64(sign as i64, &settings)?;
    Ok(rt.new_number(value))
}

pub(crate) fn string_trunc(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 1)?;
    let decimals = whole_arg(rt, args, 0)?.unwrap_or(0);
    let text = rt.number_value(recv)?.trunc(decimals, &rt.numeric())?;
    Ok(rt.new_string(&text))
}

/// `FORMAT([before], [after], [expp], [expt])`
pub(crate) fn string_format(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 4)?;
    let before = whole_arg(rt, args, 0)?;
    let after = whole_arg(rt, args, 1)?;
    let expp = whole_arg(rt, args, 2)?;
    let expt = whole_arg(rt, args, 3)?;
    let text = rt
        .number_value(recv)?
        .format(before, after, expp, expt, &rt.numeric())?;
    Ok(rt.new_string(&text))
}

fn extreme(
    rt: &mut Runtime,
    recv: ObjectId,
    args: &[ObjectId],
    pick: fn(&NumberString, &NumberString, &NumericSettings) -> RexxResult<NumberString>,
) -> RexxResult<ObjectId> {
    let settings = rt.numeric();
    let mut best = rt.number_value(recv)?.round_to(&settings)?;
    for &arg in args {
        let candidate = rt.number_value(arg)?;
        best = pick(&best, &candidate, &settings)?;
    }
    Ok(rt.new_number(best))
}

pub(crate) fn string_max(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    extreme(rt, recv, args, NumberString::max)
}

pub(crate) fn string_min(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    extreme(rt, recv, args, NumberString::min)
}

pub(crate) fn string_d2x(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 1)?;
    let length = whole_arg(rt, args, 0)?;
    let text = rt.number_value(recv)?.d2x(length, &rt.numeric())?;
    Ok(rt.new_string(&text))
}

pub(crate) fn string_d2c(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 1)?;
    let length = whole_arg(rt, args, 0)?;
    let bytes = rt.number_value(recv)?.d2c(length, &rt.numeric())?;
    Ok(rt.new_bytes(&bytes))
}

pub(crate) fn string_x2d(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 1)?;
    let length = whole_arg(rt, args, 0)?;
    let hex = rt.string_value(recv)?;
    let value = NumberString::x2d(&hex, length, &rt.numeric())?;
    Ok(rt.new_number(value))
}

pub(crate) fn string_c2d(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 1)?;
    let length = whole_arg(rt, args, 0)?;
    let bytes = rt.bytes_value(recv)?;
    let value = NumberString::c2d(&bytes, length, &rt.numeric())?;
    Ok(rt.new_number(value))
}

pub(crate) fn string_length(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let length = rt.bytes_value(recv)?.len();
    let value = NumberString::from_u64(length as u64, &rt.numeric())?;
    Ok(rt.new_number(value))
}

/// `NUM` for numbers, `CHAR` for anything else.
pub(crate) fn string_datatype(rt: &mut Runtime, recv: ObjectId, args: &[ObjectId]) -> RexxResult<ObjectId> {
    validate_arity(args, 0, 0)?;
    let numeric = rt.try_number(recv)?.is_some();
    Ok(rt.new_string(if numeric { "NUM" } else { "CHAR" }))
}
