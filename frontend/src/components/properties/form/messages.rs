use common::model::property::Property;

#[derive(Clone)]
pub enum Msg {
    Prefetched(Vec<Property>),
    PrefetchFailed(String),
    UpdateTitle(String),
    UpdateDescription(String),
    UpdateKind(String),
    UpdatePrice(String),
    UpdateLocation(String),
    UpdateImageUrl(String),
    SetAvailable(bool),
    Submit,
    Saved,
    SaveFailed(String),
}
