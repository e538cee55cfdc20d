// Example: a master/detail screen driven through an adapter, with an empty placeholder row.
use std::borrow::Cow;

use recycler::{Change, Item, ListOptions, RecyclerList, ViewBinders};
use recycler_adapter::Adapter;

struct Category(&'static str);

impl Item for Category {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Owned(format!("category:{}", self.0))
    }

    fn selection_group(&self) -> Option<&str> {
        Some("category")
    }
}

struct Product {
    category: &'static str,
    name: &'static str,
}

impl Item for Product {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Owned(format!("product:{}/{}", self.category, self.name))
    }

    fn selection_group(&self) -> Option<&str> {
        Some("product")
    }
}

struct Empty;

impl Item for Empty {
    fn diffing_id(&self) -> Cow<'_, str> {
        Cow::Borrowed("empty")
    }
}

fn catalog(category: &str) -> Vec<Product> {
    let names: &[&'static str] = match category {
        "fruit" => &["apple", "pear"],
        "tools" => &["hammer", "saw", "drill"],
        _ => &[],
    };
    let category = if category == "fruit" { "fruit" } else { "tools" };
    names.iter().map(|&name| Product { category, name }).collect()
}

fn main() {
    let binders = ViewBinders::new()
        .with::<Category>(
            |_| String::new(),
            |view, c, cx| *view = format!("[{}]{}", c.0, if cx.selected { " <" } else { "" }),
        )
        .with::<Product>(|_| String::new(), |view, p, _| *view = format!("  - {}", p.name))
        .with::<Empty>(|_| String::new(), |view, _, _| *view = "(nothing yet)".into());

    let mut adapter = Adapter::new(
        ListOptions::new().with_on_change(Some(|_: &RecyclerList, change: Change| {
            println!("  {change:?}");
        })),
        binders,
    );
    adapter.set_empty_item(Empty);
    print_rows(&adapter);

    adapter
        .list_mut()
        .extend([Category("fruit"), Category("tools")])
        .expect("unique ids");
    adapter
        .list_mut()
        .push(Product { category: "fruit", name: "placeholder" })
        .expect("unique ids");

    for position in [0, 1] {
        let Some(event) = adapter.activate(position).expect("in range") else {
            continue;
        };
        let Some(master) = event.selected.first() else {
            continue;
        };
        let category = master.diffing_id().trim_start_matches("category:").to_string();
        adapter
            .list_mut()
            .replace_selection_group_items("product", catalog(&category))
            .expect("unique ids");
        print_rows(&adapter);
    }
}

fn print_rows(adapter: &Adapter<String>) {
    for position in 0..adapter.item_count() {
        let holder = adapter.obtain(position).expect("bindable row");
        println!("{}", holder.view());
        adapter.recycle(holder);
    }
}
