/// Nivel de una notificación de usuario (toast)
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Notificación visible para el usuario. Los mensajes son textos fijos,
/// nunca el error crudo del backend.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
