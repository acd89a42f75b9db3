//! Cliente del registro de operadores
//!
//! Consume el endpoint de operadores vía HTTP y mantiene el estado de vista
//! (paginación, modales, avisos transitorios) en una única variante explícita.

pub mod client;
pub mod view;

pub use client::{Operator, OperatorApi, OperatorDraft, OperatorRegistryClient, RegistryError};
pub use view::{RegistryView, ViewState, NOTICE_DURATION, ROWS_PER_PAGE};

use uuid::Uuid;

/// Sesión del registro: una vista más el cliente de la API que la alimenta.
/// Registrar y editar refrescan la lista completa; archivar solo elimina
/// la entrada local.
pub struct Registry<A: OperatorApi> {
    pub api: A,
    pub view: RegistryView,
}

impl<A: OperatorApi> Registry<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: RegistryView::new(),
        }
    }

    /// Traer la lista completa de operadores del servidor
    pub async fn refresh(&mut self) -> Result<(), RegistryError> {
        let operators = self.api.list().await?;
        self.view.set_operators(operators);
        Ok(())
    }

    /// Enviar el formulario de registro. En éxito limpia el formulario,
    /// muestra el aviso y refresca la lista; un 409 (licencia duplicada)
    /// se reporta distinto del fallo genérico y conserva el formulario.
    pub async fn submit_registration(&mut self) -> Result<(), RegistryError> {
        let draft = match self.view.state() {
            ViewState::Registering(draft) => draft.clone(),
            _ => return Ok(()),
        };

        match self.api.register(&draft).await {
            Ok(()) => {
                self.view.close();
                self.view.show_notice("Operator registered successfully");
                self.refresh().await
            }
            Err(RegistryError::DuplicateLicense) => {
                self.view.show_notice("License number already registered");
                Ok(())
            }
            Err(_) => {
                self.view.show_notice("Failed to register operator");
                Ok(())
            }
        }
    }

    /// Enviar la edición del operador seleccionado (reemplazo completo)
    pub async fn submit_edit(&mut self) -> Result<(), RegistryError> {
        let operator = match self.view.state() {
            ViewState::Editing(operator) => operator.clone(),
            _ => return Ok(()),
        };

        match self.api.update(&operator).await {
            Ok(()) => {
                self.view.close();
                self.view.show_notice("Operator updated successfully");
                self.refresh().await
            }
            Err(_) => {
                self.view.show_notice("Failed to update operator");
                Ok(())
            }
        }
    }

    /// Confirmar el archivado pendiente. En éxito el operador se quita de la
    /// lista local sin refetch; en fallo se muestra el aviso genérico.
    pub async fn confirm_archive(&mut self) -> Result<(), RegistryError> {
        let id: Uuid = match self.view.state() {
            ViewState::ConfirmingArchive(id) => *id,
            _ => return Ok(()),
        };

        match self.api.archive(id).await {
            Ok(()) => {
                self.view.remove_operator(id);
                self.view.close();
                self.view.show_notice("Operator archived successfully");
            }
            Err(_) => {
                self.view.close();
                self.view.show_notice("Failed to archive operator");
            }
        }
        Ok(())
    }
}
