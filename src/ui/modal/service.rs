use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputRequest {
    pub title: String,
    pub help: Option<String>,
    pub initial: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRequest {
    pub title: String,
    pub options: Vec<String>,
    pub initial: usize,
}

/// Asks the user something and waits for the answer.
///
/// Both calls resolve to `None` when the user dismisses the prompt; that is
/// the only way a prompt is cancelled. There are no timeouts.
#[async_trait]
pub trait ModalService: Send + Sync {
    async fn get_text_input(&self, request: TextInputRequest) -> Option<String>;

    /// Resolves to the index of the chosen option.
    async fn get_selected_option(&self, request: ChoiceRequest) -> Option<usize>;
}
