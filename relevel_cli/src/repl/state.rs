use relevel::catalog::Catalog;

pub struct AppState {
    pub active_catalog: Option<Catalog>,
}
