use roster_core::{PageRequest, UserField, UserId, UserRecord};

#[derive(Clone, Debug)]
pub enum Message {
    // Loading
    LoadUsers,
    UsersLoaded(Result<Vec<UserRecord>, String>),

    // Search
    SearchInputChanged(String),
    SearchSubmitted,

    // Paging
    PageRequested(PageRequest),

    // Selection
    SelectionToggled(UserId),
    SelectAllToggled(bool),

    // Editing
    EditRequested(UserId),
    FieldEdited(UserId, UserField, String),
    SaveRequested(UserId),

    // Deletion
    DeleteRequested(UserId),
    DeleteSelectedRequested,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "UserList::LoadUsers",
            Self::UsersLoaded(_) => "UserList::UsersLoaded",
            Self::SearchInputChanged(_) => "UserList::SearchInputChanged",
            Self::SearchSubmitted => "UserList::SearchSubmitted",
            Self::PageRequested(_) => "UserList::PageRequested",
            Self::SelectionToggled(_) => "UserList::SelectionToggled",
            Self::SelectAllToggled(_) => "UserList::SelectAllToggled",
            Self::EditRequested(_) => "UserList::EditRequested",
            Self::FieldEdited(_, _, _) => "UserList::FieldEdited",
            Self::SaveRequested(_) => "UserList::SaveRequested",
            Self::DeleteRequested(_) => "UserList::DeleteRequested",
            Self::DeleteSelectedRequested => "UserList::DeleteSelectedRequested",
        }
    }
}
