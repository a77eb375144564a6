use common::model::property::Property;

#[derive(Clone)]
pub enum Msg {
    Loaded(Vec<Property>),
    LoadFailed(String),
    GoToPage(usize),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(String),
    DeleteFailed(String),
    DismissError,
}
