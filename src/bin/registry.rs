//! Herramienta de terminal para el registro de operadores
//!
//! Front-end interactivo sobre el cliente del registro: lista paginada,
//! registro, ver/editar y archivado con confirmación.

use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use fleet_management::registry::{
    Operator, OperatorApi, Registry, RegistryError, ViewState,
};
use fleet_management::registry::client::OperatorRegistryClient;

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚐 Fleet Management - Registro de Operadores".bright_blue().bold());
    println!("{}", "=============================================".bright_blue());
    println!();

    let base_url =
        std::env::var("FLEET_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    println!("{} {}", "🌐 Servidor:".bright_blue(), base_url);

    let mut registry = Registry::new(OperatorRegistryClient::new(base_url));

    if let Err(e) = registry.refresh().await {
        println!("{} {}", "❌ No se pudo obtener la lista inicial:".bright_red(), e);
    }

    loop {
        if let Some(notice) = registry.view.active_notice() {
            println!();
            println!("{}", format!("🔔 {}", notice).bright_green());
        }

        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📄 Ver página actual");
        println!("2. ➡️  Página siguiente");
        println!("3. ⬅️  Página anterior");
        println!("4. 📝 Registrar operador");
        println!("5. 👁  Ver / editar operador");
        println!("6. 🗄  Archivar operador");
        println!("7. 🔄 Refrescar lista");
        println!("8. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-8): ")?;

        match choice.as_str() {
            "1" => print_page(&registry),
            "2" => {
                registry.view.next_page();
                print_page(&registry);
            }
            "3" => {
                registry.view.previous_page();
                print_page(&registry);
            }
            "4" => register_flow(&mut registry).await?,
            "5" => view_edit_flow(&mut registry).await?,
            "6" => archive_flow(&mut registry).await?,
            "7" => {
                if let Err(e) = registry.refresh().await {
                    println!("{} {}", "❌ Error refrescando:".bright_red(), e);
                }
            }
            "8" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red()),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_page<A: OperatorApi>(registry: &Registry<A>) {
    let view = &registry.view;
    println!();
    println!(
        "{}",
        format!("📄 Página {} de {}", view.page(), view.total_pages().max(1)).bright_cyan().bold()
    );
    if view.current_rows().is_empty() {
        println!("{}", "   (sin operadores)".bright_black());
        return;
    }
    for (i, op) in view.current_rows().iter().enumerate() {
        println!(
            "   {}. {} - {} ({})",
            i + 1,
            op.license_no.bright_white(),
            format!("{} {}", op.firstname, op.lastname),
            op.operator_type
        );
    }
}

fn pick_from_page<A: OperatorApi>(registry: &Registry<A>) -> Result<Option<Operator>> {
    print_page(registry);
    let rows = registry.view.current_rows();
    if rows.is_empty() {
        return Ok(None);
    }
    let choice = prompt("Número de fila (enter para cancelar): ")?;
    if choice.is_empty() {
        return Ok(None);
    }
    let index: usize = match choice.parse() {
        Ok(n) => n,
        Err(_) => return Ok(None),
    };
    Ok(rows.get(index.wrapping_sub(1)).cloned())
}

async fn register_flow<A: OperatorApi>(registry: &mut Registry<A>) -> Result<()> {
    registry.view.open_register();

    println!();
    println!("{}", "📝 REGISTRO DE OPERADOR".bright_cyan().bold());
    println!("{}", "========================".bright_cyan());

    if let ViewState::Registering(draft) = registry.view.state_mut() {
        draft.firstname = prompt("Nombre: ")?;
        draft.middlename = prompt("Segundo nombre (opcional): ")?;
        draft.lastname = prompt("Apellido: ")?;
        draft.license_no = prompt("Número de licencia: ")?;
        draft.contact = prompt("Contacto: ")?;
        draft.region = prompt("Región: ")?;
        draft.city = prompt("Ciudad: ")?;
        draft.brgy = prompt("Barangay: ")?;
        draft.street = prompt("Calle: ")?;
        draft.operator_type = prompt("Tipo (Driver/Operator): ")?;
        draft.dl_codes = prompt("Códigos DL: ")?;
        draft.conditions = prompt("Condiciones: ")?;
        draft.expiration_date = prompt("Fecha de expiración (YYYY-MM-DD): ")?;
        draft.emergency_name = prompt("Contacto de emergencia - nombre: ")?;
        draft.emergency_address = prompt("Contacto de emergencia - dirección: ")?;
        draft.emergency_contact = prompt("Contacto de emergencia - teléfono: ")?;
    }

    if let Err(e) = registry.submit_registration().await {
        println!("{} {}", "❌ Error:".bright_red(), e);
    }
    Ok(())
}

async fn view_edit_flow<A: OperatorApi>(registry: &mut Registry<A>) -> Result<()> {
    let Some(operator) = pick_from_page(registry)? else {
        return Ok(());
    };
    registry.view.open_view(operator.clone());

    println!();
    println!("{}", "👁  DETALLE DE OPERADOR".bright_cyan().bold());
    println!("   Nombre: {} {} {}", operator.firstname, operator.middlename, operator.lastname);
    println!("   Licencia: {}", operator.license_no);
    println!("   Contacto: {}", operator.contact);
    println!("   Dirección: {}, {}, {}, {}", operator.street, operator.brgy, operator.city, operator.region);
    println!("   Tipo: {} | DL: {} | Condiciones: {}", operator.operator_type, operator.dl_codes, operator.conditions);
    println!("   Expira: {}", operator.expiration_date);

    let edit = prompt("¿Editar? (s/N): ")?;
    if !edit.eq_ignore_ascii_case("s") {
        registry.view.close();
        return Ok(());
    }

    registry.view.begin_edit();
    if let ViewState::Editing(op) = registry.view.state_mut() {
        // Enter conserva el valor actual
        op.firstname = prompt_or(&format!("Nombre [{}]: ", op.firstname), &op.firstname.clone())?;
        op.lastname = prompt_or(&format!("Apellido [{}]: ", op.lastname), &op.lastname.clone())?;
        op.contact = prompt_or(&format!("Contacto [{}]: ", op.contact), &op.contact.clone())?;
        op.license_no = prompt_or(&format!("Licencia [{}]: ", op.license_no), &op.license_no.clone())?;
    }

    if let Err(e) = registry.submit_edit().await {
        println!("{} {}", "❌ Error:".bright_red(), e);
    }
    Ok(())
}

fn prompt_or(label: &str, current: &str) -> Result<String> {
    let input = prompt(label)?;
    Ok(if input.is_empty() { current.to_string() } else { input })
}

async fn archive_flow<A: OperatorApi>(registry: &mut Registry<A>) -> Result<()> {
    let Some(operator) = pick_from_page(registry)? else {
        return Ok(());
    };
    registry.view.request_archive(operator.id);

    // Paso de confirmación obligatorio antes de archivar
    let confirm = prompt(&format!(
        "¿Archivar a {} {} ({})? (s/N): ",
        operator.firstname, operator.lastname, operator.license_no
    ))?;

    if confirm.eq_ignore_ascii_case("s") {
        if let Err(e) = registry.confirm_archive().await {
            match e {
                RegistryError::Http(e) => {
                    println!("{} {}", "❌ Error de red:".bright_red(), e)
                }
                other => println!("{} {}", "❌ Error:".bright_red(), other),
            }
        }
    } else {
        registry.view.close();
        println!("{}", "Operación cancelada".bright_black());
    }
    Ok(())
}
