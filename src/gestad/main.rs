use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use gestad::api::{CmdMessage, FieldEdit, GestadApi, MessageLevel, RecordDraft, RecordPatch, Stats};
use gestad::config::GestadConfig;
use gestad::error::{GestadError, Result};
use gestad::model::Record;
use gestad::store::fs::JsonFileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

const DEFAULT_DATA_FILE: &str = "data_administration.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Erreur : {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GestadApi<JsonFileStore>,
    currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    println!("Bienvenue dans le système de gestion administrative");

    loop {
        print_menu();
        let Some(choice) = prompt("\nVotre choix : ")? else {
            println!("\nMerci d'avoir utilisé le système. Au revoir !");
            break;
        };
        match choice.trim() {
            "1" => handle_add(&mut ctx)?,
            "2" => handle_list(&ctx)?,
            "3" => handle_search(&ctx)?,
            "4" => handle_update(&mut ctx)?,
            "5" => handle_delete(&mut ctx)?,
            "6" => handle_stats(&ctx)?,
            "0" => {
                println!("\nMerci d'avoir utilisé le système. Au revoir !");
                break;
            }
            _ => println!("\n{}", "❌ Choix invalide. Veuillez réessayer.".red()),
        }
        if prompt("\nAppuyez sur Entrée pour continuer...")?.is_none() {
            break;
        }
    }
    Ok(())
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GESTAD_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "gestad", "gestad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = GestadConfig::load(config_dir()).unwrap_or_default();

    let data_file = cli
        .data_file
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let api = GestadApi::open(JsonFileStore::new(data_file))?;
    Ok(AppContext {
        api,
        currency: config.currency,
    })
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    println!("\n--- Ajout d'un nouvel enregistrement ---");

    let Some(full_name) = prompt("Nom complet : ")? else {
        return Ok(());
    };
    let Some(badge_number) = prompt("Matricule : ")? else {
        return Ok(());
    };
    let Some(department) = prompt("Service : ")? else {
        return Ok(());
    };
    let Some(position) = prompt("Poste occupé : ")? else {
        return Ok(());
    };
    let Some(hire_date) = prompt("Date d'embauche (JJ/MM/AAAA) : ")? else {
        return Ok(());
    };
    let Some(salary) = prompt("Salaire : ")? else {
        return Ok(());
    };

    let draft = RecordDraft {
        full_name: full_name.trim().to_string(),
        badge_number: badge_number.trim().to_string(),
        department: department.trim().to_string(),
        position: position.trim().to_string(),
        hire_date: hire_date.trim().to_string(),
        salary,
    };

    match ctx.api.add(draft) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_records(&result.listed_records, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext) -> Result<()> {
    let Some(term) = prompt("\nEntrez un terme de recherche (nom, matricule, service) : ")? else {
        return Ok(());
    };
    match ctx.api.search(&term) {
        Ok(result) => {
            print_records(&result.listed_records, &ctx.currency);
            print_messages(&result.messages);
        }
        Err(GestadError::InvalidInput(_)) => println!("Veuillez entrer un terme de recherche."),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext) -> Result<()> {
    let listed = ctx.api.list()?;
    print_records(&listed.listed_records, &ctx.currency);
    if listed.listed_records.is_empty() {
        print_messages(&listed.messages);
        return Ok(());
    }

    let Some(raw_id) = prompt("\nEntrez l'ID de l'enregistrement à modifier : ")? else {
        return Ok(());
    };
    let Ok(id) = raw_id.trim().parse::<u32>() else {
        println!("\n{}", "❌ Veuillez entrer un ID valide.".red());
        return Ok(());
    };
    let Some(current) = ctx.api.find_by_id(id) else {
        println!("\n{}", "❌ Aucun enregistrement trouvé avec cet ID.".red());
        return Ok(());
    };

    println!("\nLaissez vide pour conserver la valeur actuelle");
    let Some(full_name) = prompt(&format!("Nom [{}]: ", current.full_name))? else {
        return Ok(());
    };
    let Some(badge_number) = prompt(&format!("Matricule [{}]: ", current.badge_number))? else {
        return Ok(());
    };
    let Some(department) = prompt(&format!("Service [{}]: ", current.department))? else {
        return Ok(());
    };
    let Some(position) = prompt(&format!("Poste [{}]: ", current.position))? else {
        return Ok(());
    };
    let Some(hire_date) = prompt(&format!("Date embauche [{}]: ", current.hire_date))? else {
        return Ok(());
    };
    let Some(salary) = prompt(&format!("Salaire [{}]: ", current.salary))? else {
        return Ok(());
    };

    let patch = RecordPatch {
        full_name: edit_from(&full_name),
        badge_number: edit_from(&badge_number),
        department: edit_from(&department),
        position: edit_from(&position),
        hire_date: edit_from(&hire_date),
        salary: edit_from(&salary),
    };

    match ctx.api.update(id, patch) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext) -> Result<()> {
    let listed = ctx.api.list()?;
    print_records(&listed.listed_records, &ctx.currency);
    if listed.listed_records.is_empty() {
        print_messages(&listed.messages);
        return Ok(());
    }

    let Some(raw_id) = prompt("\nEntrez l'ID de l'enregistrement à supprimer : ")? else {
        return Ok(());
    };
    let Ok(id) = raw_id.trim().parse::<u32>() else {
        println!("\n{}", "❌ Veuillez entrer un ID valide.".red());
        return Ok(());
    };
    let Some(record) = ctx.api.find_by_id(id) else {
        println!("\n{}", "❌ Aucun enregistrement trouvé avec cet ID.".red());
        return Ok(());
    };

    let confirm_text = format!("Confirmez la suppression de {} ? (o/n) : ", record.full_name);
    let Some(answer) = prompt(&confirm_text)? else {
        return Ok(());
    };
    if !answer.trim().eq_ignore_ascii_case("o") {
        return Ok(());
    }

    match ctx.api.delete(id) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    match result.stats {
        Some(stats) => print_stats(&stats, &ctx.currency),
        None => print_messages(&result.messages),
    }
    Ok(())
}

/// Read one line from stdin. `None` means the stream is closed; the caller
/// treats that as a request to quit.
fn read_line() -> Result<Option<String>> {
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt(text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    read_line()
}

/// Empty answers keep the stored value, anything else replaces it.
fn edit_from(answer: &str) -> FieldEdit<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        FieldEdit::Keep
    } else {
        FieldEdit::Replace(trimmed.to_string())
    }
}

const MENU_WIDTH: usize = 50;

fn print_menu() {
    println!("\n{}", "=".repeat(MENU_WIDTH));
    println!(
        "{}",
        format!("{:=^width$}", " SYSTÈME DE GESTION ADMINISTRATIVE ", width = MENU_WIDTH).bold()
    );
    println!("{}", "=".repeat(MENU_WIDTH));
    println!("1. Ajouter un enregistrement");
    println!("2. Lister tous les enregistrements");
    println!("3. Rechercher un enregistrement");
    println!("4. Modifier un enregistrement");
    println!("5. Supprimer un enregistrement");
    println!("6. Statistiques");
    println!("0. Quitter");
    println!("{}", "=".repeat(MENU_WIDTH));
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("\n{}", format!("✅ {}", message.content).green()),
            MessageLevel::Warning => println!("\n{}", message.content.yellow()),
            MessageLevel::Error => println!("\n{}", format!("❌ {}", message.content).red()),
        }
    }
}

fn print_error(error: &GestadError) {
    println!("\n{}", format!("❌ {}", error).red());
}

const LABEL_WIDTH: usize = 13;

fn print_records(records: &[Record], currency: &str) {
    println!("\n--- Liste des enregistrements ({} trouvés) ---", records.len());

    for (position, record) in records.iter().enumerate() {
        println!("\n{}", format!("Enregistrement #{}", position + 1).bold());
        print_field("ID", &record.id.to_string());
        print_field("Nom", &record.full_name);
        print_field("Matricule", &record.badge_number);
        print_field("Service", &record.department);
        print_field("Poste", &record.position);
        print_field("Date embauche", &record.hire_date);
        print_field("Salaire", &format!("{:.2} {}", record.salary, currency));
        println!("{}", "-".repeat(40).dimmed());
    }
}

fn print_field(label: &str, value: &str) {
    println!("{:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn print_stats(stats: &Stats, currency: &str) {
    println!("\n--- Statistiques ---");
    println!("\nTotal enregistrements : {}", stats.count);
    println!("Salaire moyen : {:.2} {}", stats.mean_salary, currency);
    println!("Salaire max : {:.2} {}", stats.max_salary, currency);
    println!("Salaire min : {:.2} {}", stats.min_salary, currency);

    println!("\nRépartition par service :");
    let width = stats
        .by_department
        .iter()
        .map(|(department, _)| department.width())
        .max()
        .unwrap_or(0);
    for (department, count) in &stats.by_department {
        let padding = " ".repeat(width - department.width());
        println!("- {}{} : {} employé(s)", department, padding, count);
    }
}
