use study_plan::{ScheduledItem, generate_adaptive_schedule, generate_fixed_schedule, render_document, render_table};

const HEADER: &str = "Level | Week | Day | Activity | Module | Duration(min) | Goal";
const SEPARATOR: &str = "--- | --- | --- | --- | --- | --- | ---";

#[test]
fn table_has_header_separator_and_one_row_per_item() {
    let items = generate_fixed_schedule();
    let table = render_table(&items);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), items.len() + 2);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], SEPARATOR);
    assert!(!table.ends_with('\n'));
}

#[test]
fn empty_input_renders_header_only() {
    assert_eq!(render_table(&[]), format!("{HEADER}\n{SEPARATOR}"));
}

#[test]
fn rows_keep_field_order_and_input_order() {
    let items = generate_adaptive_schedule(180, "balanced", 1).unwrap();
    let table = render_table(&items);
    let rows: Vec<&str> = table.lines().skip(2).collect();
    assert_eq!(
        rows[1],
        format!(
            "1 | 1 | Week1-Day2 | Quiz | L1-1-Quiz | 26 | {}",
            items[1].goal
        )
    );
    for (row, item) in rows.iter().zip(&items) {
        assert!(row.contains(&item.module));
    }
}

#[test]
fn delimiter_inside_a_field_is_not_escaped() {
    let item = ScheduledItem::new(1, 1, 1, "Read | Write", "L1-1", 30, "goal");
    let table = render_table(&[item]);
    let row = table.lines().nth(2).unwrap();
    assert_eq!(row.split(" | ").count(), 8);
}

#[test]
fn document_prefixes_the_title() {
    let items = generate_fixed_schedule();
    let document = render_document("My plan", &items);
    let mut lines = document.lines();
    assert_eq!(lines.next(), Some("My plan"));
    assert_eq!(lines.next(), Some(HEADER));
}
