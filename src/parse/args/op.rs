use crate::err::LpErr;
use crate::op::Op;
use crate::parse::args::condition::parse_cond;
use crate::parse::args::{parse_arg, parse_as, parse_cmd, parse_required_as};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, LpErr> {
    let mut ops = Vec::new();
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, LpErr> {
    let op = if parse_cmd(args, "upper") {
        Op::Upper
    } else if parse_cmd(args, "lower") {
        Op::Lower
    } else if parse_cmd(args, "replace") {
        parse_replace(args)?
    } else if parse_cmd(args, "index") {
        Op::Index
    } else if parse_cmd(args, "filter") {
        Op::Filter(parse_cond(args, "filter")?)
    } else if parse_cmd(args, "reject") {
        Op::Reject(parse_cond(args, "reject")?)
    } else if parse_cmd(args, "take") {
        Op::Take(parse_required_as(args, "take", "n")?)
    } else if parse_cmd(args, "drop") {
        Op::Drop(parse_required_as(args, "drop", "n")?)
    } else if parse_cmd(args, "chars") {
        Op::Chars
    } else if parse_cmd(args, "split") {
        Op::Split(parse_arg(args, "split", "sep")?)
    } else {
        return Ok(None);
    };
    Ok(Some(op))
}

fn parse_replace(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LpErr> {
    let from = parse_arg(args, "replace", "from")?;
    let to = parse_arg(args, "replace", "to")?;
    let count = parse_as::<usize>(args);
    Ok(Op::Replace { from, to, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Cond, Select, TextSelectMode};
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_ops() {
        assert_eq!(Ok(vec![]), parse_ops(&mut build_args("")));
        assert_eq!(
            Ok(vec![Op::Upper, Op::Lower, Op::Index, Op::Chars, Op::Split(",".to_string())]),
            parse_ops(&mut build_args(":upper :LOWER :index :chars :split ,"))
        );
        let mut args = build_args(":upper :to out");
        assert_eq!(Ok(vec![Op::Upper]), parse_ops(&mut args));
        assert_eq!(Some(":to".to_string()), args.next());
    }

    #[test]
    fn test_parse_replace() {
        assert_eq!(
            Ok(vec![Op::Replace { from: "a".to_string(), to: ":b".to_string(), count: None }]),
            parse_ops(&mut build_args(":replace a ::b"))
        );
        assert_eq!(
            Ok(vec![Op::Replace { from: "a".to_string(), to: "b".to_string(), count: Some(2) }]),
            parse_ops(&mut build_args(":replace a b 2"))
        );
        assert_eq!(
            Err(LpErr::MissingArg { cmd: "replace", arg: "to" }),
            parse_ops(&mut build_args(":replace a"))
        );
    }

    #[test]
    fn test_parse_select() {
        let upper = Cond::new(Select::Text { mode: TextSelectMode::Upper }, false);
        assert_eq!(
            Ok(vec![Op::Filter(upper.clone()), Op::Reject(upper), Op::Drop(1), Op::Take(2)]),
            parse_ops(&mut build_args(":filter upper :reject upper :drop 1 :take 2"))
        );
        assert_eq!(
            Err(LpErr::BadArg { cmd: "take", arg: "n", arg_value: "x".to_string() }),
            parse_ops(&mut build_args(":take x"))
        );
        assert_eq!(Err(LpErr::MissingArg { cmd: "drop", arg: "n" }), parse_ops(&mut build_args(":drop")));
        assert!(parse_ops(&mut build_args(":filter")).is_err());
    }
}
