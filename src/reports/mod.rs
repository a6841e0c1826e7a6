use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use saju::api::{BatchReport, RejectedCandidate};
use saju::relations::RelationHit;
use saju::roots::RootStrength;
use saju::scorer::{Evaluation, SubScore};
use saju::tables::{hidden_stems, Branch, Stem};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn sub_cell(s: &SubScore) -> Cell {
    match s.value {
        Some(v) => Cell::new(format!("{:.1}", v)),
        None => Cell::new("n/a").fg(Color::DarkGrey),
    }
}

pub fn print_ranking(report: &BatchReport, top: usize) {
    println!("\nChart: {}   fingerprint {}", report.chart, &report.fingerprint[..12]);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Elements"),
        Cell::new("Bal"),
        Cell::new("Yong").fg(Color::Green),
        Cell::new("Str"),
        Cell::new("10G"),
        Cell::new("Pen").fg(Color::Red),
        Cell::new("Final").fg(Color::Cyan),
        Cell::new("Conf"),
    ]);
    align_right(&mut table, 3..=9);

    for (rank, e) in report.results.iter().take(top).enumerate() {
        let b = &e.breakdown;
        let elements = e
            .candidate
            .characters
            .iter()
            .map(|c| format!("{}{}", c.character, c.resource_element.hanja()))
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&e.candidate.label).add_attribute(Attribute::Bold),
            Cell::new(elements),
            sub_cell(&b.balance),
            sub_cell(&b.yongshin_match).fg(Color::Green),
            sub_cell(&b.strength),
            sub_cell(&b.ten_god),
            Cell::new(format!("{:.1}", b.penalties.total)).fg(Color::Red),
            Cell::new(format!("{:.1}", b.final_score)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", b.confidence)),
        ]);
    }
    println!("{}", table);

    if report.results.len() > top {
        println!("({} more not shown)", report.results.len() - top);
    }
}

pub fn print_failures(failures: &[RejectedCandidate]) {
    if failures.is_empty() {
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rejected").add_attribute(Attribute::Bold).fg(Color::Red),
        Cell::new("Reason"),
    ]);
    for f in failures {
        table.add_row(vec![Cell::new(&f.label), Cell::new(&f.reason)]);
    }
    println!("\n{}", table);
}

pub fn print_trace(evaluation: &Evaluation) {
    println!("\nTrace for {}", evaluation.candidate.label);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Evidence"),
        Cell::new("Reasoning"),
        Cell::new("Conf"),
    ]);
    for step in &evaluation.trace {
        let mut evidence = step.evidence.join("\n");
        if !step.citations.is_empty() {
            evidence.push_str(&format!("\n[{}]", step.citations.join("; ")));
        }
        table.add_row(vec![
            Cell::new(step.key).add_attribute(Attribute::Bold),
            Cell::new(evidence),
            Cell::new(step.reasoning.join("\n")),
            Cell::new(
                step.confidence
                    .map(|c| format!("{:.2}", c))
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("{}", table);
}

pub fn print_hidden_table() {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Branch").add_attribute(Attribute::Bold),
        Cell::new("Element"),
        Cell::new("Kind"),
        Cell::new("Residual"),
        Cell::new("Middle"),
        Cell::new("Main").fg(Color::Cyan),
    ]);

    for branch in Branch::iter() {
        let mut slots = [String::new(), String::new(), String::new()];
        for entry in hidden_stems(branch) {
            slots[entry.role as usize] = format!("{} {}d", entry.stem.hanja(), entry.days);
        }
        let [residual, middle, main] = slots;
        table.add_row(vec![
            Cell::new(format!("{} {}", branch.hanja(), branch)).add_attribute(Attribute::Bold),
            Cell::new(branch.element()),
            Cell::new(branch.kind()),
            Cell::new(residual),
            Cell::new(middle),
            Cell::new(main).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_relations(branches: &[Branch], hits: &[RelationHit]) {
    let line = branches
        .iter()
        .map(|b| format!("{}", b.hanja()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nBranches: {}", line);
    if hits.is_empty() {
        println!("No relations.");
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Relation").add_attribute(Attribute::Bold),
        Cell::new("Branches"),
        Cell::new("Element"),
    ]);
    for hit in hits {
        let members = hit
            .branches
            .iter()
            .map(|b| b.hanja().to_string())
            .collect::<String>();
        table.add_row(vec![
            Cell::new(hit.relation).add_attribute(Attribute::Bold),
            Cell::new(members),
            Cell::new(hit.element.map(|e| e.to_string()).unwrap_or_default()),
        ]);
    }
    println!("{}", table);
}

pub fn print_roots(stem: Stem, rows: &[(Branch, RootStrength)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("{} {} in", stem.hanja(), stem)).add_attribute(Attribute::Bold),
        Cell::new("Root"),
    ]);
    for (branch, strength) in rows {
        let cell = Cell::new(strength);
        let cell = match strength {
            RootStrength::Strong => cell.fg(Color::Green),
            RootStrength::Weak => cell.fg(Color::Yellow),
            RootStrength::None => cell.fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(format!("{} {}", branch.hanja(), branch)), cell]);
    }
    println!("\n{}", table);
}
