use crate::err::LpErr;
use crate::output::Output;
use crate::parse::args::condition::parse_opt_cond;
use crate::parse::args::{parse_arg, parse_cmd, parse_tag_nocase};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LpErr> {
    if parse_cmd(args, "to") {
        parse_to(args)
    } else if parse_cmd(args, "find") {
        Ok(Output::Find(parse_opt_cond(args, "find")?))
    } else if parse_cmd(args, "some") {
        Ok(Output::Any(parse_opt_cond(args, "some")?))
    } else if parse_cmd(args, "every") {
        Ok(Output::Every(parse_opt_cond(args, "every")?))
    } else {
        Ok(Output::StdOut)
    }
}

fn parse_to(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LpErr> {
    if parse_tag_nocase(args, "out") {
        Ok(Output::StdOut)
    } else if parse_tag_nocase(args, "file") {
        let file = parse_arg(args, "to file", "file_name")?;
        let append = parse_tag_nocase(args, "append");
        let crlf = if parse_tag_nocase(args, "crlf") {
            Some(true)
        } else if parse_tag_nocase(args, "lf") {
            Some(false)
        } else {
            None
        };
        Ok(Output::File { file, append, crlf })
    } else {
        match args.next() {
            Some(arg_value) => Err(LpErr::BadArg { cmd: "to", arg: "target", arg_value }),
            None => Err(LpErr::MissingArg { cmd: "to", arg: "target" }),
        }
    }
}
