use crate::err::LpErr;
use crate::seq::helper::range;
use crate::seq::{Lazy, Pull, PullRes, Source};
use crate::{Integer, PipeRes};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, StdinLock};
use std::iter::repeat;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// 标准输入：`:in`
    StdIn,
    /// 外部文件，逐个打开
    File { files: Vec<String> },
    /// 直接字面值
    Of { values: Vec<String> },
    /// 有界整数范围，立即生成
    Range { start: Integer, end: Integer, step: Integer },
    /// 无界整数生成器，溢出时结束
    Gen { start: Integer, step: Integer },
    /// 重复
    Repeat { value: String, count: Option<usize> },
}

impl Input {
    pub(crate) fn pipe(self) -> PipeRes {
        let pipe = match self {
            Input::StdIn => Lazy::new(StdInLines { lines: io::stdin().lines() }).boxed(),
            Input::File { files } => Lazy::new(FileLines::new(files)).boxed(),
            Input::Of { values } => Lazy::of(values).boxed(),
            Input::Range { start, end, step } => Lazy::of(range(start, end, step)).map(|i, _| i.to_string()).boxed(),
            Input::Gen { start, step } => {
                let mut next = Some(start);
                Lazy::from_fn(move || {
                    Ok(match next {
                        Some(n) => {
                            next = n.checked_add(step);
                            Pull::Item(n.to_string())
                        }
                        None => Pull::Done,
                    })
                })
                .boxed()
            }
            Input::Repeat { value, count } => match count {
                Some(count) => Lazy::of(repeat(value)).take(count).boxed(),
                None => Lazy::of(repeat(value)).boxed(),
            },
        };
        Ok(pipe)
    }
}

struct StdInLines {
    lines: Lines<StdinLock<'static>>,
}

impl Source for StdInLines {
    type Item = String;

    fn pull(&mut self) -> PullRes<String> {
        match self.lines.next() {
            Some(Ok(line)) => Ok(Pull::Item(line)),
            Some(Err(err)) => Err(LpErr::ReadStdInErr(err.to_string())),
            None => Ok(Pull::Done),
        }
    }
}

/// 按顺序读取多个文件的行，关闭时释放当前打开的文件
struct FileLines {
    files: std::vec::IntoIter<String>,
    current: Option<(String, Lines<BufReader<File>>)>,
}

impl FileLines {
    fn new(files: Vec<String>) -> FileLines {
        FileLines { files: files.into_iter(), current: None }
    }

    fn release(&mut self) {
        if let Some((file, _)) = self.current.take() {
            log::debug!("release file `{file}`");
        }
        self.files = Vec::new().into_iter();
    }
}

impl Source for FileLines {
    type Item = String;

    fn pull(&mut self) -> PullRes<String> {
        loop {
            if let Some((file, lines)) = &mut self.current {
                match lines.next() {
                    Some(Ok(line)) => return Ok(Pull::Item(line)),
                    Some(Err(err)) => return Err(LpErr::ReadFileErr { file: file.clone(), err: err.to_string() }),
                    None => self.current = None,
                }
            }
            match self.files.next() {
                Some(file) => match File::open(&file) {
                    Ok(reader) => {
                        log::debug!("open file `{file}`");
                        self.current = Some((file, BufReader::new(reader).lines()));
                    }
                    Err(err) => return Err(LpErr::OpenFileErr { file, err: err.to_string() }),
                },
                None => return Ok(Pull::Done),
            }
        }
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        self.release();
        Ok(())
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        log::debug!("abort reading files: {err}");
        self.release();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::tests::drain;
    use std::io::Write;

    fn take_all(input: Input) -> Vec<String> {
        drain(input.pipe().unwrap())
    }

    #[test]
    fn test_of() {
        assert_eq!(vec!["a", "b"], take_all(Input::Of { values: vec!["a".to_string(), "b".to_string()] }));
    }

    #[test]
    fn test_range() {
        assert_eq!(vec!["0", "2", "4"], take_all(Input::Range { start: 0, end: 5, step: 2 }));
        assert_eq!(vec!["3", "2", "1"], take_all(Input::Range { start: 3, end: 0, step: -1 }));
    }

    #[test]
    fn test_gen() {
        let pipe = Input::Gen { start: 5, step: 5 }.pipe().unwrap().take(3);
        assert_eq!(vec!["5", "10", "15"], drain(pipe));
        let pipe = Input::Gen { start: Integer::MAX - 1, step: 1 }.pipe().unwrap();
        assert_eq!(vec![(Integer::MAX - 1).to_string(), Integer::MAX.to_string()], drain(pipe));
    }

    #[test]
    fn test_repeat() {
        assert_eq!(vec!["x"; 3], take_all(Input::Repeat { value: "x".to_string(), count: Some(3) }));
        let pipe = Input::Repeat { value: "y".to_string(), count: None }.pipe().unwrap().take(4);
        assert_eq!(vec!["y"; 4], drain(pipe));
    }

    #[test]
    fn test_file() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("lp_input_test_{}_1.txt", std::process::id()));
        let second = dir.join(format!("lp_input_test_{}_2.txt", std::process::id()));
        File::create(&first).unwrap().write_all(b"a\nb\n").unwrap();
        File::create(&second).unwrap().write_all(b"c").unwrap();
        let files = vec![first.to_string_lossy().into_owned(), second.to_string_lossy().into_owned()];
        assert_eq!(vec!["a", "b", "c"], take_all(Input::File { files }));
        std::fs::remove_file(first).unwrap();
        std::fs::remove_file(second).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let mut pipe = Input::File { files: vec!["/no/such/lp/file".to_string()] }.pipe().unwrap();
        assert!(matches!(pipe.next(), Err(LpErr::OpenFileErr { .. })));
        assert_eq!(Ok(Pull::Done), pipe.next());
    }

    #[test]
    fn test_file_close_releases() {
        let mut lines = FileLines::new(vec!["unused".to_string()]);
        assert_eq!(Ok(()), lines.close_normally());
        assert_eq!(Ok(Pull::Done), lines.pull());
    }
}
