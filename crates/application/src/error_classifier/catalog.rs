use std::collections::BTreeMap;

use console_access_core::{NonEmptyString, capitalize};

use super::get_resource_name;

/// How a message is built for an error code, whatever the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTemplate {
    /// `"<Resource> name already exists"`, with the resource taken from the
    /// server message or the operation name.
    ResourceAlreadyExists,
    /// The server message, capitalized.
    ServerMessage,
}

/// Lookup tables mapping error codes to user-facing messages.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    operation_messages: BTreeMap<(String, String), String>,
    code_templates: BTreeMap<String, CodeTemplate>,
    global_messages: BTreeMap<String, String>,
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self {
            operation_messages: BTreeMap::new(),
            code_templates: BTreeMap::from([
                (
                    "ObjectAlreadyExists".to_owned(),
                    CodeTemplate::ResourceAlreadyExists,
                ),
                ("ObjectNotFound".to_owned(), CodeTemplate::ServerMessage),
            ]),
            global_messages: BTreeMap::from([(
                "Forbidden".to_owned(),
                "Action not authorized".to_owned(),
            )]),
        }
    }
}

impl ErrorCatalog {
    /// Creates a catalog with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            operation_messages: BTreeMap::new(),
            code_templates: BTreeMap::new(),
            global_messages: BTreeMap::new(),
        }
    }

    /// Registers a fixed message for one operation and error code. It takes
    /// precedence over code templates.
    #[must_use]
    pub fn with_operation_message(
        mut self,
        operation: impl Into<String>,
        error_code: impl Into<String>,
        message: NonEmptyString,
    ) -> Self {
        self.operation_messages
            .insert((operation.into(), error_code.into()), message.into());
        self
    }

    /// Registers a template applied to an error code for every operation.
    #[must_use]
    pub fn with_code_template(
        mut self,
        error_code: impl Into<String>,
        template: CodeTemplate,
    ) -> Self {
        self.code_templates.insert(error_code.into(), template);
        self
    }

    /// Registers an operation-independent message for an error code.
    #[must_use]
    pub fn with_global_message(
        mut self,
        error_code: impl Into<String>,
        message: NonEmptyString,
    ) -> Self {
        self.global_messages.insert(error_code.into(), message.into());
        self
    }

    pub(super) fn operation_message(
        &self,
        operation: &str,
        error_code: &str,
        server_message: &str,
    ) -> Option<String> {
        if let Some(message) = self
            .operation_messages
            .get(&(operation.to_owned(), error_code.to_owned()))
        {
            return Some(message.clone());
        }

        let message = match self.code_templates.get(error_code)? {
            CodeTemplate::ResourceAlreadyExists => {
                let resource = get_resource_name(operation, server_message)
                    .filter(|resource| !resource.is_empty())?;
                format!("{} name already exists", capitalize(&resource))
            }
            CodeTemplate::ServerMessage => capitalize(server_message),
        };

        (!message.trim().is_empty()).then_some(message)
    }

    pub(super) fn global_message(&self, error_code: &str) -> Option<&str> {
        self.global_messages.get(error_code).map(String::as_str)
    }
}
