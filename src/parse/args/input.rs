use crate::err::LpErr;
use crate::input::Input;
use crate::parse::args::{parse_arg, parse_arg1, parse_as, parse_cmd};
use crate::parse::token::{parse_gen as parse_gen_token, parse_range as parse_range_token, parse_whole};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LpErr> {
    if parse_cmd(args, "in") {
        Ok(Input::StdIn)
    } else if parse_cmd(args, "file") {
        Ok(Input::File { files: parse_arg1(args, "file", "file_name")? })
    } else if parse_cmd(args, "of") {
        Ok(Input::Of { values: parse_arg1(args, "of", "text")? })
    } else if parse_cmd(args, "range") {
        parse_range(args)
    } else if parse_cmd(args, "gen") {
        parse_gen(args)
    } else if parse_cmd(args, "repeat") {
        parse_repeat(args)
    } else {
        Ok(Input::StdIn)
    }
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LpErr> {
    let range = parse_arg(args, "range", "range")?;
    let (start, end, step) = parse_whole(parse_range_token, &range, "range", "range")?;
    Ok(Input::Range { start, end, step })
}

fn parse_gen(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LpErr> {
    let gen_arg = parse_arg(args, "gen", "start")?;
    let (start, step) = parse_whole(parse_gen_token, &gen_arg, "gen", "start")?;
    Ok(Input::Gen { start, step })
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LpErr> {
    let value = parse_arg(args, "repeat", "text")?;
    let count = parse_as::<usize>(args);
    Ok(Input::Repeat { value, count })
}
