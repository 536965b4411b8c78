//! # Prelim CLI Application
//!
//! Terminal front-end for the preliminary sizing engine. Prompts for the
//! basic grid and building numbers (or loads a saved `.plm` project passed
//! as the first argument), runs the analysis, and prints a report plus the
//! JSON results for downstream tooling.

use std::io::{self, BufRead, Write};
use std::path::Path;

use prelim_core::analysis::analyze;
use prelim_core::grid::GridSpec;
use prelim_core::project::ProjectData;
use prelim_core::store::load_project;
use prelim_core::warnings::{Locale, WarningCode};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    let value = prompt_f64(prompt, default as f64);
    if value >= 1.0 {
        value as usize
    } else {
        default
    }
}

fn build_project_interactively() -> ProjectData {
    let nx = prompt_usize("Bays in X [3]: ", 3);
    let ny = prompt_usize("Bays in Y [2]: ", 2);
    let x_spacing = prompt_f64("Bay width in X (m) [5.0]: ", 5.0);
    let y_spacing = prompt_f64("Bay width in Y (m) [4.0]: ", 4.0);
    let floors = prompt_f64("Floors [5]: ", 5.0).max(1.0) as u32;

    let mut project = ProjectData {
        grid: GridSpec::uniform(nx, ny, x_spacing, y_spacing),
        ..ProjectData::default()
    };
    project.building.floors = floors;
    project
}

fn warning_suffix(warnings: &[WarningCode]) -> String {
    if warnings.is_empty() {
        String::new()
    } else {
        let messages: Vec<&str> = warnings.iter().map(|w| w.message(Locale::En)).collect();
        format!("  [WARN: {}]", messages.join("; "))
    }
}

fn main() {
    println!("Prelim CLI - Preliminary Structural Sizing");
    println!("==========================================");
    println!();

    let project = match std::env::args().nth(1) {
        Some(path) => match load_project(Path::new(&path)) {
            Ok(project) => {
                println!("Loaded project '{}' from {}", project.meta.name, path);
                project.data
            }
            Err(e) => {
                eprintln!("Error loading {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => build_project_interactively(),
    };

    if let Err(e) = project.validate() {
        eprintln!("Invalid project: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    let results = analyze(&project);
    let building = &project.building;

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  PRELIMINARY SIZING RESULTS");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Grid:      {} x {} bays, {:.1} m x {:.1} m plan",
        project.grid.nx,
        project.grid.ny,
        project.grid.total_width_x_m(),
        project.grid.total_width_y_m()
    );
    println!(
        "  Building:  {} floors @ {:.2} m, {} on {}",
        building.floors,
        building.floor_height_m,
        building.usage.display_name(),
        building.soil.display_name()
    );
    println!(
        "  Materials: f'c = {:.0} MPa, fy = {:.0} MPa",
        building.materials.fck_mpa, building.materials.fy_mpa
    );
    println!();

    println!("Columns ({}):", results.columns.len());
    for column in &results.columns {
        println!(
            "  {}{}: {} mm sq, {}, Pu = {:.0} kN, phiPn = {:.0} kN{}",
            project.grid.x_label(column.node.i),
            project.grid.y_label(column.node.j),
            column.section.size_mm,
            column.section.bars,
            column.ultimate_load_kn,
            column.section.axial_capacity_kn,
            warning_suffix(&column.warnings)
        );
    }
    println!();

    println!("Beams ({}):", results.beams.len());
    for beam in &results.beams {
        println!(
            "  {} {}{}-{}{}: L = {:.1} m, Mu = {:.1} kNm, Vu = {:.1} kN, {}",
            beam.direction,
            project.grid.x_label(beam.from.i),
            project.grid.y_label(beam.from.j),
            project.grid.x_label(beam.to.i),
            project.grid.y_label(beam.to.j),
            beam.span_m,
            beam.mu_knm,
            beam.vu_kn,
            beam.bars
        );
    }
    println!();

    println!("Slabs:");
    for slab in &results.slabs {
        println!(
            "  {} strip: L = {:.2} m, w = {:.2} kPa, Mu = {:.2} kNm/m, {}",
            slab.direction, slab.span_m, slab.w_uls_kpa, slab.mu_knm_per_m, slab.bar
        );
    }
    println!();

    println!("Footings ({}):", results.footings.len());
    for footing in &results.footings {
        println!(
            "  {}{}: {:.2} m sq x {:.2} m, q = {:.0} kPa{}",
            project.grid.x_label(footing.node.i),
            project.grid.y_label(footing.node.j),
            footing.side_m,
            footing.depth_m,
            footing.bearing_pressure_kpa,
            warning_suffix(&footing.warnings)
        );
    }
    println!();

    println!("Bill of Quantities:");
    for item in &results.boq {
        println!("  {:<20} {:>12.2} {}", item.name, item.quantity, item.unit);
    }
    println!();
    println!("═══════════════════════════════════════════════");
    println!(
        "  TOTAL COST: {:.0} (concrete {:.2} m³, steel {:.1} kg)",
        results.cost.total_cost, results.cost.concrete_m3, results.cost.steel_kg
    );
    println!("═══════════════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&results) {
        println!("{}", json);
    }
}
