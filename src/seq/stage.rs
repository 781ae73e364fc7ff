//! 链式操作的各个阶段。每个阶段独占其上游适配器，并只保存自身的计数状态。

use crate::err::LpErr;
use crate::seq::{Lazy, Pull, PullRes, Source};

/// 关闭上游：正常关闭总是成功
fn close_parent<S: Source>(parent: &mut Lazy<S>) -> Result<(), LpErr> {
    parent.close();
    Ok(())
}

fn throw_parent<S: Source>(parent: &mut Lazy<S>, err: &LpErr) -> Result<(), LpErr> {
    parent.throw(err);
    Ok(())
}

pub struct Map<S, F> {
    parent: Lazy<S>,
    f: F,
    index: usize,
}

impl<S, F> Map<S, F> {
    pub(in crate::seq) fn new(parent: Lazy<S>, f: F) -> Map<S, F> {
        Map { parent, f, index: 0 }
    }
}

impl<S, U, F> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item, usize) -> Result<U, LpErr>,
{
    type Item = U;

    fn pull(&mut self) -> PullRes<U> {
        match self.parent.next()? {
            Pull::Item(item) => match (self.f)(item, self.index) {
                Ok(mapped) => {
                    self.index += 1;
                    Ok(Pull::Item(mapped))
                }
                Err(err) => {
                    self.parent.throw(&err);
                    Err(err)
                }
            },
            Pull::Done => Ok(Pull::Done),
        }
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        close_parent(&mut self.parent)
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        throw_parent(&mut self.parent, err)
    }
}

pub struct Filter<S, F> {
    parent: Lazy<S>,
    pred: F,
}

impl<S, F> Filter<S, F> {
    pub(in crate::seq) fn new(parent: Lazy<S>, pred: F) -> Filter<S, F> {
        Filter { parent, pred }
    }
}

impl<S, F> Source for Filter<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> Result<bool, LpErr>,
{
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<S::Item> {
        while let Pull::Item(item) = self.parent.next()? {
            match (self.pred)(&item) {
                Ok(true) => return Ok(Pull::Item(item)),
                Ok(false) => continue,
                Err(err) => {
                    self.parent.throw(&err);
                    return Err(err);
                }
            }
        }
        Ok(Pull::Done)
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        close_parent(&mut self.parent)
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        throw_parent(&mut self.parent, err)
    }
}

/// 依次耗尽每个上游元素展开得到的子源，耗尽后才拉取下一个上游元素
pub struct FlatMap<S, F, N> {
    parent: Lazy<S>,
    f: F,
    inner: Option<Lazy<N>>,
}

impl<S, F, N> FlatMap<S, F, N> {
    pub(in crate::seq) fn new(parent: Lazy<S>, f: F) -> FlatMap<S, F, N> {
        FlatMap { parent, f, inner: None }
    }
}

impl<S, F, N> Source for FlatMap<S, F, N>
where
    S: Source,
    N: Source,
    F: FnMut(S::Item) -> Result<N, LpErr>,
{
    type Item = N::Item;

    fn pull(&mut self) -> PullRes<N::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Ok(Pull::Item(item)) => return Ok(Pull::Item(item)),
                    Ok(Pull::Done) => self.inner = None,
                    // 子源拉取出错与上游拉取出错一样，不关闭上游
                    Err(err) => {
                        self.inner = None;
                        return Err(err);
                    }
                }
            }
            match self.parent.next()? {
                Pull::Item(item) => match (self.f)(item) {
                    Ok(inner) => self.inner = Some(Lazy::new(inner)),
                    Err(err) => {
                        self.parent.throw(&err);
                        return Err(err);
                    }
                },
                Pull::Done => return Ok(Pull::Done),
            }
        }
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        if let Some(mut inner) = self.inner.take() {
            inner.close();
        }
        close_parent(&mut self.parent)
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        if let Some(mut inner) = self.inner.take() {
            inner.throw(err);
        }
        throw_parent(&mut self.parent, err)
    }
}

/// 达到上限后不再拉取上游，也不关闭上游
pub struct Take<S> {
    parent: Lazy<S>,
    remaining: usize,
}

impl<S> Take<S> {
    pub(in crate::seq) fn new(parent: Lazy<S>, n: usize) -> Take<S> {
        Take { parent, remaining: n }
    }
}

impl<S: Source> Source for Take<S> {
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<S::Item> {
        if self.remaining == 0 {
            return Ok(Pull::Done);
        }
        match self.parent.next()? {
            Pull::Item(item) => {
                self.remaining -= 1;
                Ok(Pull::Item(item))
            }
            Pull::Done => {
                self.remaining = 0;
                Ok(Pull::Done)
            }
        }
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        close_parent(&mut self.parent)
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        throw_parent(&mut self.parent, err)
    }
}

/// 丢弃前`n`个元素，之后原样转发
pub struct Skip<S> {
    parent: Lazy<S>,
    remaining: usize,
}

impl<S> Skip<S> {
    pub(in crate::seq) fn new(parent: Lazy<S>, n: usize) -> Skip<S> {
        Skip { parent, remaining: n }
    }
}

impl<S: Source> Source for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<S::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.parent.next()?.is_done() {
                self.remaining = 0;
                return Ok(Pull::Done);
            }
        }
        self.parent.next()
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        close_parent(&mut self.parent)
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        throw_parent(&mut self.parent, err)
    }
}

#[cfg(test)]
mod tests {
    use crate::err::LpErr;
    use crate::seq::tests::{drain, Counting};
    use crate::seq::{Lazy, Pull, Source};

    #[test]
    fn test_take_after_parent_done() {
        let source = Counting::upto(2);
        let pulls = source.pulls.clone();
        let mut lazy = Lazy::new(source).take(5);
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(Ok(Pull::Item(2)), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(3, pulls.get());
    }

    #[test]
    fn test_take_does_not_close_parent() {
        let source = Counting::endless();
        let closes = source.closes.clone();
        assert_eq!(vec![1, 2], drain(Lazy::new(source).take(2)));
        assert_eq!(0, closes.get());
    }

    #[test]
    fn test_drop_more_than_available() {
        let source = Counting::upto(3);
        let pulls = source.pulls.clone();
        let mut lazy = Lazy::new(source).drop(5);
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(4, pulls.get());
    }

    #[test]
    fn test_drop_then_take_on_endless() {
        assert_eq!(vec![4, 5, 6], drain(Lazy::new(Counting::endless()).drop(3).take(3)));
    }

    #[test]
    fn test_flat_map_pulls_parent_lazily() {
        let source = Counting::endless();
        let pulls = source.pulls.clone();
        let mut lazy = Lazy::new(source).flat_map(|x| Lazy::of(vec![x; 3]));
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(1, pulls.get());
        assert_eq!(Ok(Pull::Item(2)), lazy.next());
        assert_eq!(2, pulls.get());
    }

    #[test]
    fn test_flat_map_close_closes_inner_and_parent() {
        let source = Counting::endless();
        let closes = source.closes.clone();
        let inner = Counting::upto(2);
        let inner_closes = inner.closes.clone();
        let mut inner = Some(inner);
        let mut lazy = Lazy::new(source).flat_map(move |_| Lazy::new(inner.take().unwrap()));
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        lazy.close();
        assert_eq!(1, closes.get());
        assert_eq!(1, inner_closes.get());
    }

    #[test]
    fn test_flat_map_generator_error() {
        let source = Counting::endless();
        let aborts = source.aborts.clone();
        let mut lazy = Lazy::new(source).try_flat_map(|x| {
            if x < 2 { Ok(Lazy::of(vec![x])) } else { Err(LpErr::Callback("no more".to_string())) }
        });
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(Err(LpErr::Callback("no more".to_string())), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(1, aborts.get());
    }

    #[test]
    fn test_flat_map_inner_error_keeps_parent_open() {
        let source = Counting::endless();
        let aborts = source.aborts.clone();
        let closes = source.closes.clone();
        let mut lazy = Lazy::new(source).flat_map(|x| {
            let mut calls = 0;
            Lazy::from_fn(move || {
                calls += 1;
                if calls == 1 { Ok(Pull::Item(x)) } else { Err(LpErr::Source(format!("inner {x}"))) }
            })
        });
        assert_eq!(Ok(Pull::Item(1)), lazy.next());
        assert_eq!(Err(LpErr::Source("inner 1".to_string())), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(0, aborts.get());
        assert_eq!(0, closes.get());
        lazy.close();
        assert_eq!(1, closes.get());
    }

    #[test]
    fn test_filter_predicate_error() {
        let source = Counting::upto(5);
        let aborts = source.aborts.clone();
        let mut lazy = Lazy::new(source)
            .try_filter(|x| if *x == 4 { Err(LpErr::Callback("four".to_string())) } else { Ok(x % 2 == 0) });
        assert_eq!(Ok(Pull::Item(2)), lazy.next());
        assert_eq!(Err(LpErr::Callback("four".to_string())), lazy.next());
        assert_eq!(Ok(Pull::Done), lazy.next());
        assert_eq!(1, aborts.get());
        lazy.close();
        assert_eq!(1, aborts.get());
    }

    #[test]
    fn test_map_index_only_counts_yielded() {
        let lazy = Lazy::of(1..=6).filter(|x| x % 2 == 0).map(|x, i| x * 10 + i as i32);
        assert_eq!(vec![20, 41, 62], drain(lazy));
    }

    #[test]
    fn test_stage_is_source() {
        let mut stage = Lazy::of(1..=3).take(2);
        assert_eq!(Ok(Pull::Item(1)), stage.pull());
        assert_eq!(Ok(()), stage.close_normally());
        assert_eq!(Ok(Pull::Done), stage.pull());
    }
}
