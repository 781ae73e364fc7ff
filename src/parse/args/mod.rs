use crate::err::LpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use std::iter::Peekable;
use std::str::FromStr;

mod condition;
mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

/// 依次解析输入、操作和输出，不允许有剩余参数。
pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), LpErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(LpErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 命令以`:`开头，`::`开头的参数为转义后的普通参数。
fn is_cmd(arg: &str) -> bool {
    arg.starts_with(':') && !arg.starts_with("::")
}

/// 如果下一个参数是命令`cmd`则消耗它
fn parse_cmd(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &str) -> bool {
    if let Some(value) = args.peek()
        && let Some(name) = value.strip_prefix(':')
        && name.eq_ignore_ascii_case(cmd)
    {
        args.next();
        true
    } else {
        false
    }
}

/// 解析一个或多个参数，参数不为命令格式，处理转义
fn parse_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, LpErr> {
    let res = parse_arg0(args);
    if res.is_empty() { Err(LpErr::MissingArg { cmd, arg }) } else { Ok(res) }
}

/// 解析零个或多个参数，参数不为命令格式，处理转义
fn parse_arg0(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<String> {
    let mut res = Vec::new();
    while let Some(arg) = parse_opt_arg(args) {
        res.push(arg);
    }
    res
}

/// 解析一个可选的参数，参数不为命令格式，处理转义
fn parse_opt_arg(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<String> {
    if let Some(value) = args.peek()
        && !is_cmd(value)
    {
        args.next().map(escape)
    } else {
        None
    }
}

/// 解析一个必选参数，处理转义
fn parse_arg(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<String, LpErr> {
    args.next().map(escape).ok_or(LpErr::MissingArg { cmd, arg })
}

fn escape(arg: String) -> String {
    if let Some(stripped) = arg.strip_prefix("::") { format!(":{stripped}") } else { arg }
}

fn parse_tag_nocase(args: &mut Peekable<impl Iterator<Item = String>>, tag: &'static str) -> bool {
    if let Some(value) = args.peek()
        && value.eq_ignore_ascii_case(tag)
    {
        args.next();
        true
    } else {
        false
    }
}

/// 下一个参数能解析为`T`时才消耗它
fn parse_as<T: FromStr>(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<T> {
    let option = args.peek().and_then(|value| value.parse::<T>().ok());
    if option.is_some() {
        args.next();
    }
    option
}

/// 必选参数，且必须能解析为`T`
fn parse_required_as<T: FromStr>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, LpErr> {
    let arg_value = parse_arg(args, cmd, arg)?;
    arg_value.parse::<T>().map_err(|_| LpErr::BadArg { cmd, arg, arg_value })
}

#[cfg(test)]
pub(in crate::parse) fn build_args(args: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args.split_whitespace().map(String::from).peekable()
}
