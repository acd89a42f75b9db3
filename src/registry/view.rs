//! Estado de vista del registro de operadores
//!
//! El estado de la pantalla es una única variante explícita en lugar de un
//! juego de banderas independientes: no existe combinación inconsistente
//! (p. ej. "editando" sin operador seleccionado).

use crate::registry::client::{Operator, OperatorDraft};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Filas por página de la tabla
pub const ROWS_PER_PAGE: usize = 8;

/// Duración de los avisos transitorios
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Estado de la pantalla del registro
#[derive(Debug, Clone)]
pub enum ViewState {
    Idle,
    Registering(OperatorDraft),
    Viewing(Operator),
    Editing(Operator),
    ConfirmingArchive(Uuid),
}

/// Aviso transitorio que se auto-descarta
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: Instant,
}

/// Vista del registro: lista, página actual, estado y aviso
pub struct RegistryView {
    operators: Vec<Operator>,
    page: usize,
    state: ViewState,
    notice: Option<Notice>,
}

impl RegistryView {
    pub fn new() -> Self {
        Self {
            operators: Vec::new(),
            page: 1,
            state: ViewState::Idle,
            notice: None,
        }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    // ---- Paginación ----

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.operators.len().div_ceil(ROWS_PER_PAGE)
    }

    /// Filas visibles de la página actual
    pub fn current_rows(&self) -> &[Operator] {
        let start = (self.page - 1) * ROWS_PER_PAGE;
        let end = (start + ROWS_PER_PAGE).min(self.operators.len());
        if start >= self.operators.len() {
            &[]
        } else {
            &self.operators[start..end]
        }
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Si la página actual quedó vacía, retroceder hasta una con filas
    fn clamp_page(&mut self) {
        while self.page > 1 && self.current_rows().is_empty() {
            self.page -= 1;
        }
    }

    /// Reemplazar la lista completa (refetch del servidor)
    pub fn set_operators(&mut self, operators: Vec<Operator>) {
        self.operators = operators;
        self.clamp_page();
    }

    /// Eliminar un operador de la lista local (flujo de archivado)
    pub fn remove_operator(&mut self, id: Uuid) {
        self.operators.retain(|o| o.id != id);
        self.clamp_page();
    }

    // ---- Transiciones de estado ----

    pub fn open_register(&mut self) {
        self.state = ViewState::Registering(OperatorDraft::default());
    }

    pub fn open_view(&mut self, operator: Operator) {
        self.state = ViewState::Viewing(operator);
    }

    /// Pasar de ver a editar; en cualquier otro estado no hace nada
    pub fn begin_edit(&mut self) {
        if let ViewState::Viewing(operator) = &self.state {
            self.state = ViewState::Editing(operator.clone());
        }
    }

    pub fn request_archive(&mut self, id: Uuid) {
        self.state = ViewState::ConfirmingArchive(id);
    }

    /// Cerrar cualquier modal y volver al estado de reposo
    pub fn close(&mut self) {
        self.state = ViewState::Idle;
    }

    // ---- Avisos transitorios ----

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            expires_at: Instant::now() + NOTICE_DURATION,
        });
    }

    pub fn active_notice(&self) -> Option<&str> {
        self.notice_at(Instant::now())
    }

    fn notice_at(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| now < n.expires_at)
            .map(|n| n.message.as_str())
    }
}

impl Default for RegistryView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(n: u128) -> Operator {
        Operator {
            id: Uuid::from_u128(n),
            firstname: format!("Op{}", n),
            middlename: String::new(),
            lastname: "Cruz".to_string(),
            license_no: format!("L-{}", n),
            contact: String::new(),
            region: String::new(),
            city: String::new(),
            brgy: String::new(),
            street: String::new(),
            operator_type: "Driver".to_string(),
            dl_codes: String::new(),
            conditions: String::new(),
            expiration_date: "2027-01-01".to_string(),
            emergency_name: String::new(),
            emergency_address: String::new(),
            emergency_contact: String::new(),
            archived: false,
            created_at: None,
        }
    }

    fn view_with(n: usize) -> RegistryView {
        let mut view = RegistryView::new();
        view.set_operators((0..n as u128).map(operator).collect());
        view
    }

    #[test]
    fn page_count_is_ceiling_of_rows() {
        assert_eq!(view_with(0).total_pages(), 0);
        assert_eq!(view_with(8).total_pages(), 1);
        assert_eq!(view_with(9).total_pages(), 2);
        assert_eq!(view_with(17).total_pages(), 3);
    }

    #[test]
    fn current_rows_slices_the_page() {
        let mut view = view_with(17);
        assert_eq!(view.current_rows().len(), 8);
        view.next_page();
        assert_eq!(view.current_rows().len(), 8);
        view.next_page();
        assert_eq!(view.current_rows().len(), 1);
        // No avanza más allá de la última página
        view.next_page();
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn page_self_corrects_after_removal() {
        let mut view = view_with(9);
        view.next_page();
        assert_eq!(view.page(), 2);

        // Al quitar el único operador de la página 2, la vista retrocede
        view.remove_operator(Uuid::from_u128(8));
        assert_eq!(view.page(), 1);
        assert_eq!(view.current_rows().len(), 8);
    }

    #[test]
    fn previous_page_stops_at_one() {
        let mut view = view_with(3);
        view.previous_page();
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn edit_only_reachable_from_viewing() {
        let mut view = RegistryView::new();

        // Desde Idle no hay edición posible
        view.begin_edit();
        assert!(matches!(view.state(), ViewState::Idle));

        view.open_view(operator(1));
        view.begin_edit();
        assert!(matches!(view.state(), ViewState::Editing(_)));

        view.close();
        assert!(matches!(view.state(), ViewState::Idle));
    }

    #[test]
    fn archive_request_then_cancel() {
        let mut view = view_with(1);
        view.request_archive(Uuid::from_u128(0));
        assert!(matches!(view.state(), ViewState::ConfirmingArchive(_)));

        view.close();
        assert!(matches!(view.state(), ViewState::Idle));
        // Cancelar no toca la lista
        assert_eq!(view.operators().len(), 1);
    }

    #[test]
    fn notice_expires_after_duration() {
        let mut view = RegistryView::new();
        view.show_notice("Operator registered successfully");

        let now = Instant::now();
        assert_eq!(view.notice_at(now), Some("Operator registered successfully"));
        assert_eq!(view.notice_at(now + NOTICE_DURATION + Duration::from_millis(1)), None);
    }
}
