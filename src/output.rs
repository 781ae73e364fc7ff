use crate::condition::Cond;
use crate::err::LpErr;
use crate::seq::helper::always;
use crate::seq::Pull;
use crate::Pipe;
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Debug, PartialEq)]
pub(crate) enum Output {
    /// :to out     输出到标准输出，未指定输出时的默认输出。
    StdOut,
    /// :to file <file_name>[ append][ lf|crlf]
    File { file: String, append: bool, crlf: Option<bool> },
    /// :find[ <cond>]  输出第一个满足条件的值，找到后立即停止。
    Find(Option<Cond>),
    /// :some[ <cond>]  输出是否存在满足条件的值。
    Any(Option<Cond>),
    /// :every[ <cond>] 输出是否所有值都满足条件，没有任何值时为`true`。
    Every(Option<Cond>),
}

impl Output {
    /// 消费流水线，无论成功与否最后都会关闭它。
    pub(crate) fn handle(self, mut pipe: Pipe) -> Result<(), LpErr> {
        let res = self.write(&mut pipe, &mut std::io::stdout().lock());
        finish(&mut pipe, res)
    }

    fn write(self, pipe: &mut Pipe, out: &mut impl Write) -> Result<(), LpErr> {
        match self {
            Output::StdOut => {
                while let Pull::Item(item) = pipe.next()? {
                    write_line(out, item)?;
                }
                Ok(())
            }
            Output::File { file, append, crlf } => {
                match OpenOptions::new().write(true).truncate(!append).append(append).create(true).open(&file) {
                    Ok(mut writer) => {
                        let ending = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
                        while let Pull::Item(item) = pipe.next()? {
                            if let Err(err) = write!(writer, "{item}{ending}") {
                                let err = LpErr::WriteToFileErr { file: file.clone(), item, err: err.to_string() };
                                pipe.throw(&err);
                                return Err(err);
                            }
                        }
                        Ok(())
                    }
                    Err(err) => Err(LpErr::OpenFileErr { file, err: err.to_string() }),
                }
            }
            Output::Find(cond) => {
                let found = match cond {
                    Some(cond) => pipe.find(|item| cond.test(item))?,
                    None => pipe.find(always)?,
                };
                match found {
                    Some(item) => write_line(out, item),
                    None => Ok(()),
                }
            }
            Output::Any(cond) => {
                let res = match cond {
                    Some(cond) => pipe.some(|item| cond.test(item))?,
                    None => pipe.some(always)?,
                };
                write_line(out, res.to_string())
            }
            Output::Every(cond) => {
                let res = match cond {
                    Some(cond) => pipe.every(|item| cond.test(item))?,
                    None => pipe.every(always)?,
                };
                write_line(out, res.to_string())
            }
        }
    }
}

/// 成功时正常关闭，失败时以该错误关闭。
fn finish(pipe: &mut Pipe, res: Result<(), LpErr>) -> Result<(), LpErr> {
    match &res {
        Ok(()) => {
            pipe.close();
            log::debug!("pipe closed");
        }
        Err(err) => {
            pipe.throw(err);
            log::debug!("pipe closed with error: {err}");
        }
    }
    res
}

fn write_line(out: &mut impl Write, item: String) -> Result<(), LpErr> {
    if let Err(err) = writeln!(out, "{item}") {
        return Err(LpErr::WriteToFileErr { file: "<stdout>".to_string(), item, err: err.to_string() });
    }
    Ok(())
}
