// Example: single-select and multi-select groups with a filter on top.
use std::borrow::Cow;
use std::rc::Rc;

use recycler::{Descriptor, Item, RecyclerList};

struct Choice {
    id: &'static str,
    group: &'static str,
}

impl Item for Choice {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id)
    }

    fn selection_group(&self) -> Option<&str> {
        Some(self.group)
    }

    fn on_filter(&self, search_term: &str) -> bool {
        self.id.contains(search_term)
    }
}

fn names(items: &[Rc<Descriptor>]) -> Vec<&str> {
    items.iter().map(|d| d.diffing_id()).collect()
}

fn main() {
    let mut list = RecyclerList::default();
    list.set_selection_group_policy("toppings", true);
    list.set_selection_group_listener("size", |group, selected| {
        println!("{group}: {:?}", names(selected));
    });
    list.set_selection_group_listener("toppings", |group, selected| {
        println!("{group}: {:?}", names(selected));
    });

    list.extend([
        Choice { id: "small", group: "size" },
        Choice { id: "large", group: "size" },
        Choice { id: "olives", group: "toppings" },
        Choice { id: "onions", group: "toppings" },
    ])
    .expect("unique ids");

    list.activate(0).expect("in range");
    list.activate(1).expect("in range");
    list.activate(2).expect("in range");
    list.activate(3).expect("in range");

    // Rows hidden by a filter keep their selection.
    list.filter("on");
    println!("visible: {:?}", names(list.active()));
    list.activate(0).expect("in range");
    list.clear_filter();

    println!("size: {:?}", names(&list.selected_items("size")));
    println!("toppings: {:?}", names(&list.selected_items("toppings")));
}
