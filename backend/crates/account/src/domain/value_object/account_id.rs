use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountMarker;
pub type AccountId = Id<AccountMarker>;
