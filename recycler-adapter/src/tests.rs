use crate::*;

use std::borrow::Cow;
use std::boxed::Box;
use std::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use recycler::{
    Change, DEFAULT_MAX_RECYCLED, Error, Item, ListOptions, RecyclerList, SharedViewPool,
    ViewBinders, ViewKind, downcast_item,
};

#[derive(Clone, Debug)]
struct Song {
    id: &'static str,
    album: &'static str,
}

impl Item for Song {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id)
    }

    fn selection_group(&self) -> Option<&str> {
        Some("songs")
    }

    fn has_to_be_replaced_by(&self, new_item: &dyn Item) -> bool {
        downcast_item::<Song>(new_item).is_none_or(|new| new.album != self.album)
    }

    fn on_filter(&self, search_term: &str) -> bool {
        self.id.contains(search_term)
    }
}

struct Empty(&'static str);

impl Item for Empty {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Borrowed("empty")
    }
}

/// Shares the id space with `Song` but binds a different view.
struct Jingle(&'static str);

impl Item for Jingle {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }
}

fn song(id: &'static str) -> Song {
    Song { id, album: "one" }
}

fn binders() -> ViewBinders<String> {
    ViewBinders::new()
        .with::<Song>(
            |_| String::from("song"),
            |view, song, cx| {
                let mark = if cx.selected { "*" } else { "" };
                *view = std::format!("{}#{}{mark}", song.id, cx.position);
            },
        )
        .with::<Empty>(|_| String::new(), |view, empty, _| *view = empty.0.to_string())
        .with::<Jingle>(|_| String::new(), |view, jingle, cx| {
            *view = std::format!("jingle:{}#{}", jingle.0, cx.position);
        })
}

const PLACEHOLDER: &str = "<empty>";

/// Mirrors adapter rows; knows the placeholder only through the change stream.
#[derive(Default)]
struct Host {
    rows: RefCell<Vec<String>>,
    log: RefCell<Vec<Change>>,
}

impl Host {
    fn apply(&self, list: &RecyclerList, change: Change) {
        self.log.borrow_mut().push(change);
        let mut rows = self.rows.borrow_mut();
        let id = |i: usize| match list.get(i) {
            Some(d) => d.diffing_id().to_string(),
            None => PLACEHOLDER.to_string(),
        };
        match change {
            Change::InsertRange { start, count } => {
                for i in start..start + count {
                    rows.insert(i, id(i));
                }
            }
            Change::RemoveRange { start, count } => {
                rows.drain(start..start + count);
            }
            Change::Move { from, to } => {
                let moved = rows.remove(from);
                rows.insert(to, moved);
            }
            Change::ChangeAt(_) => {}
            Change::FullRefresh => {
                *rows = list.iter().map(|d| d.diffing_id().to_string()).collect();
            }
        }
    }

    fn take_log(&self) -> Vec<Change> {
        core::mem::take(&mut *self.log.borrow_mut())
    }

    fn assert_mirrors(&self, adapter: &Adapter<String>) {
        let want: Vec<String> = (0..adapter.item_count())
            .map(|i| match adapter.slot(i) {
                Some(RowSlot::Placeholder) => PLACEHOLDER.to_string(),
                _ => adapter.descriptor_at(i).unwrap().diffing_id().to_string(),
            })
            .collect();
        assert_eq!(*self.rows.borrow(), want);
    }
}

fn hosted() -> (Adapter<String>, Rc<Host>) {
    let host = Rc::new(Host::default());
    let sink = Rc::clone(&host);
    let adapter = Adapter::new(
        ListOptions::new().with_on_change(Some(move |list: &RecyclerList, change: Change| {
            sink.apply(list, change)
        })),
        binders(),
    );
    (adapter, host)
}

#[test]
fn placeholder_shows_only_while_empty() {
    let (mut adapter, host) = hosted();

    assert_eq!(adapter.item_count(), 0);
    assert!(adapter.set_empty_item(Empty("nothing here")).is_none());
    assert_eq!(adapter.item_count(), 1);
    assert_eq!(adapter.slot(0), Some(RowSlot::Placeholder));
    assert_eq!(adapter.slot(1), None);
    assert_eq!(host.take_log(), [Change::InsertRange { start: 0, count: 1 }]);
    host.assert_mirrors(&adapter);

    adapter.list_mut().extend([song("a"), song("b")]).unwrap();
    assert_eq!(adapter.item_count(), 2);
    assert!(!adapter.is_showing_empty_item());
    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 2 },
        ]
    );
    host.assert_mirrors(&adapter);

    adapter.list_mut().remove("a");
    adapter.list_mut().remove("b");
    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
    host.assert_mirrors(&adapter);
}

#[test]
fn placeholder_follows_sync_through_an_empty_moment() {
    let (mut adapter, host) = hosted();
    adapter.set_empty_item(Empty("none"));
    adapter.list_mut().push(song("a")).unwrap();
    host.take_log();

    adapter.list_mut().sync([song("b")]).unwrap();

    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
    host.assert_mirrors(&adapter);
}

#[test]
fn replacing_and_clearing_the_placeholder() {
    let (mut adapter, host) = hosted();
    adapter.set_empty_item(Empty("one"));
    host.take_log();

    let previous = adapter.set_empty_item(Empty("two"));
    assert_eq!(previous.map(|d| d.diffing_id().to_string()).as_deref(), Some("empty"));
    assert_eq!(adapter.obtain(0).unwrap().into_view(), "two");
    assert_eq!(host.take_log(), [Change::ChangeAt(0)]);

    assert!(adapter.clear_empty_item().is_some());
    assert!(adapter.empty_item().is_none());
    assert_eq!(adapter.item_count(), 0);
    assert_eq!(host.take_log(), [Change::RemoveRange { start: 0, count: 1 }]);
    host.assert_mirrors(&adapter);

    // Without a placeholder, emptying the list reports only the removal.
    adapter.list_mut().push(song("a")).unwrap();
    adapter.list_mut().clear();
    assert_eq!(
        host.take_log(),
        [
            Change::InsertRange { start: 0, count: 1 },
            Change::RemoveRange { start: 0, count: 1 },
        ]
    );
}

#[test]
fn placeholder_of_another_kind_is_reinserted() {
    let (mut adapter, host) = hosted();
    adapter.set_empty_item(Empty("none"));
    host.take_log();

    adapter.set_empty_item(Jingle("silence"));

    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
    host.assert_mirrors(&adapter);
    assert_eq!(adapter.obtain(0).unwrap().into_view(), "jingle:silence#0");
}

#[test]
fn item_of_another_kind_gets_a_fresh_holder() {
    let (mut adapter, host) = hosted();
    adapter.list_mut().extend([song("a"), song("b")]).unwrap();
    let holder = adapter.obtain(0).unwrap();
    host.take_log();

    let batch: Vec<Box<dyn Item>> = std::vec![Box::new(Jingle("a")), Box::new(song("b"))];
    adapter.list_mut().sync(batch).unwrap();

    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
    host.assert_mirrors(&adapter);

    // The old row's holder goes back to the pool; position 0 needs a holder of the new kind.
    assert!(adapter.recycle(holder));
    assert_eq!(adapter.view_kind(0), Ok(ViewKind::of::<Jingle>()));
    let holder = adapter.obtain(0).unwrap();
    assert_eq!(holder.kind(), ViewKind::of::<Jingle>());
    assert_eq!(holder.view(), "jingle:a#0");
    assert_eq!(adapter.pool().borrow().len(), 1);
}

#[test]
fn kind_change_of_the_only_item_passes_through_the_placeholder() {
    let (mut adapter, host) = hosted();
    adapter.set_empty_item(Empty("none"));
    adapter.list_mut().push(song("a")).unwrap();
    host.take_log();

    adapter.list_mut().sync([Jingle("a")]).unwrap();

    assert_eq!(
        host.take_log(),
        [
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
    host.assert_mirrors(&adapter);
    assert_eq!(adapter.obtain(0).unwrap().into_view(), "jingle:a#0");
}

#[test]
fn placeholder_row_is_inert() {
    let (mut adapter, _host) = hosted();
    adapter.set_empty_item(Empty("none"));

    assert!(adapter.activate(0).unwrap().is_none());
    assert_eq!(adapter.dispatch_event(0, &()), Ok(false));
    assert_eq!(adapter.view_kind(0), Ok(ViewKind::of::<Empty>()));
    assert_eq!(
        adapter.view_kind(1),
        Err(Error::IndexOutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn obtain_creates_then_recycles_holders() {
    let (mut adapter, _host) = hosted();
    adapter.list_mut().extend([song("a"), song("b")]).unwrap();

    let holder = adapter.obtain(0).unwrap();
    assert_eq!(holder.view(), "a#0");
    assert_eq!(holder.bind_count(), 1);

    assert!(adapter.recycle(holder));
    assert_eq!(adapter.pool().borrow().len(), 1);

    let holder = adapter.obtain(1).unwrap();
    assert_eq!(holder.view(), "b#1");
    assert_eq!(holder.bind_count(), 2);
    assert!(adapter.pool().borrow().is_empty());
}

#[test]
fn bind_reflects_selection() {
    let (mut adapter, host) = hosted();
    adapter.list_mut().extend([song("a"), song("b")]).unwrap();
    host.take_log();

    let event = adapter.activate(1).unwrap().unwrap();
    assert_eq!(event.group, "songs");
    assert_eq!(host.take_log(), [Change::ChangeAt(1)]);

    let mut holder = adapter.obtain(0).unwrap();
    adapter.bind_holder(&mut holder, 1).unwrap();
    assert_eq!(holder.view(), "b#1*");

    assert!(adapter.select("a").is_some());
    adapter.bind_holder(&mut holder, 1).unwrap();
    assert_eq!(holder.view(), "b#1");
}

#[test]
fn holders_survive_across_adapters_sharing_a_pool() {
    let pool = SharedViewPool::default();
    let mut first = Adapter::with_pool(ListOptions::new(), binders(), pool.clone());
    let mut second = Adapter::with_pool(ListOptions::new(), binders(), pool.clone());
    first.list_mut().push(song("a")).unwrap();
    second.list_mut().push(song("z")).unwrap();

    let holder = first.obtain(0).unwrap();
    assert!(first.recycle(holder));
    let holder = second.obtain(0).unwrap();

    assert_eq!(holder.view(), "z#0");
    assert_eq!(holder.bind_count(), 2);
    assert!(first.pool().ptr_eq(second.pool()));
}

#[test]
fn pool_cap_applies_per_kind() {
    let (mut adapter, _host) = hosted();
    let ids = ["a", "b", "c", "d", "e", "f"];
    adapter.list_mut().extend(ids.map(song)).unwrap();

    let holders: Vec<_> = (0..ids.len()).map(|i| adapter.obtain(i).unwrap()).collect();
    let kept = holders
        .into_iter()
        .map(|h| adapter.recycle(h))
        .filter(|&kept| kept)
        .count();

    assert_eq!(kept, DEFAULT_MAX_RECYCLED);
}

#[test]
fn missing_binder_surfaces_unknown_kind() {
    let mut adapter = Adapter::new(ListOptions::new(), ViewBinders::<String>::new());
    adapter.list_mut().push(song("a")).unwrap();

    assert_eq!(
        adapter.obtain(0).unwrap_err(),
        Error::UnknownViewKind(ViewKind::of::<Song>())
    );
    assert!(matches!(
        adapter.create_holder(ViewKind::from_name("nope")),
        Err(Error::UnknownViewKind(_))
    ));
}

#[test]
fn positions_follow_the_filter() {
    let (mut adapter, host) = hosted();
    adapter.set_empty_item(Empty("no matches"));
    adapter.list_mut().extend([song("apple"), song("berry")]).unwrap();

    adapter.list_mut().filter("zz");
    assert!(adapter.is_showing_empty_item());
    assert_eq!(adapter.slot(0), Some(RowSlot::Placeholder));

    adapter.list_mut().filter("rr");
    assert_eq!(adapter.item_count(), 1);
    assert_eq!(adapter.slot(0).and_then(|s| s.item_index()), Some(0));
    assert_eq!(
        adapter.stable_id(0),
        Ok(adapter.list().canonical()[1].stable_id())
    );
    host.assert_mirrors(&adapter);
}

#[test]
fn from_list_keeps_the_list_callback() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let list = RecyclerList::new(ListOptions::new().with_on_change(Some(
        move |_: &RecyclerList, change: Change| sink.borrow_mut().push(change),
    )));
    let mut adapter = Adapter::from_list(list, binders(), SharedViewPool::default());
    adapter.set_empty_item(Empty("none"));

    adapter.list_mut().push(song("a")).unwrap();
    adapter.set_on_change(None::<fn(&RecyclerList, Change)>);
    adapter.list_mut().push(song("b")).unwrap();

    assert_eq!(
        *seen.borrow(),
        [
            Change::InsertRange { start: 0, count: 1 },
            Change::RemoveRange { start: 0, count: 1 },
            Change::InsertRange { start: 0, count: 1 },
        ]
    );
}
