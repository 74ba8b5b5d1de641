//! Table output for list commands.

use std::ops::RangeFrom;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Render `rows` under `header`, right-aligning the columns in `numeric`.
pub(crate) fn render<const N: usize>(
    header: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
    numeric: RangeFrom<usize>,
) -> String {
    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric), Alignment::right());

    table.to_string()
}
