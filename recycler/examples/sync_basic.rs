// Example: reconcile a list against new snapshots and print the change stream.
use std::borrow::Cow;

use recycler::{Change, Item, ListOptions, RecyclerList, downcast_item};

#[derive(Clone, Debug)]
struct Contact {
    id: u32,
    name: String,
}

impl Item for Contact {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Owned(format!("contact:{}", self.id))
    }

    fn has_to_be_replaced_by(&self, new_item: &dyn Item) -> bool {
        downcast_item::<Contact>(new_item).is_none_or(|new| new.name != self.name)
    }
}

fn contacts(entries: &[(u32, &str)]) -> Vec<Contact> {
    entries
        .iter()
        .map(|&(id, name)| Contact {
            id,
            name: name.to_string(),
        })
        .collect()
}

fn main() {
    let mut list = RecyclerList::new(ListOptions::new().with_on_change(Some(
        |list: &RecyclerList, change: Change| println!("  {change:?} -> len={}", list.len()),
    )));

    println!("initial:");
    list.extend(contacts(&[(1, "Ada"), (2, "Brian"), (3, "Chen")]))
        .expect("unique ids");

    println!("sync:");
    let summary = list
        .sync(contacts(&[(3, "Chen"), (2, "Bryan"), (4, "Dara")]))
        .expect("unique ids");
    println!("summary: {summary:?}");

    // Same snapshot again: nothing to report.
    let again = list
        .sync(contacts(&[(3, "Chen"), (2, "Bryan"), (4, "Dara")]))
        .expect("unique ids");
    println!("second sync is a no-op: {}", again.is_noop());
}
