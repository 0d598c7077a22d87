use comfy_table::Table;

use crate::graph::{DistanceMatrix, Graph, Weight, INF};

/// Lay out an all-pairs result as a table: one column per target, one row
/// per source, both labelled with vertex names. Unreachable pairs show `INF`.
pub fn distance_table(graph: &Graph, distances: &DistanceMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend(graph.names().map(str::to_string));
    table.set_header(header);

    for (name, row) in graph.names().zip(distances.rows()) {
        let mut cells = vec![name.to_string()];
        cells.extend(row.iter().map(|&d| format_distance(d)));
        table.add_row(cells);
    }

    table
}

fn format_distance(distance: Weight) -> String {
    if distance >= INF {
        "INF".to_string()
    } else {
        distance.to_string()
    }
}
