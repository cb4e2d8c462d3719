use crate::sheet::SheetClient;

#[derive(Clone)]
pub struct AppState {
    pub sheet: SheetClient,
}

impl AppState {
    pub fn new(sheet: SheetClient) -> Self {
        Self { sheet }
    }
}
