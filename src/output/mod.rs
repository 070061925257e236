// Output formatting — terminal display and report generation.

pub mod report;
pub mod terminal;

/// Join at most `max_items` items with ", ", appending ", ..." if any were left out.
pub fn preview_list<I, S>(items: I, max_items: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = items.into_iter();
    let shown: Vec<String> = iter
        .by_ref()
        .take(max_items)
        .map(|s| s.as_ref().to_string())
        .collect();
    let elided = iter.next().is_some();

    let mut out = shown.join(", ");
    if elided {
        out.push_str(", ...");
    }
    out
}
