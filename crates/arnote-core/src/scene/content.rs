//! Static ticket content shown on the anchored panel.

use super::PaneState;

/// One pane's payload: a title and the body text rendered onto the panel.
#[derive(Debug, PartialEq, Eq)]
pub struct TicketContent {
    pub title: &'static str,
    pub body: &'static str,
}

/// Look up the payload for a pane. Static table, three entries.
pub fn content_for(state: PaneState) -> &'static TicketContent {
    match state {
        PaneState::Details => &DETAILS,
        PaneState::Description => &DESCRIPTION,
        PaneState::Time => &TIME_TRACKING,
    }
}

/// Ticket field summary.
pub static DETAILS: TicketContent = TicketContent {
    title: "Details",
    body: "\tType: BUG\n\
           \tPriority: Highest\n\
           \tStatus: DEV-ACTIVE\n\
           \tFlags: None\n\
           \n\
           Assignee: Zach\n\
           Reporter: Dehn\n\
           \n\
           Affects Version/s: None\n\
           Component/s: iOS\n\
           Labels: None\n\
           Budget: MPP\n\
           Fix Version/s: RB2_D6",
};

/// QA reproduction notes.
pub static DESCRIPTION: TicketContent = TicketContent {
    title: "Description",
    body: "QA Note: Attempted to replicate with 1.2.0 (64) and 1.2.0 (63) \
           in QA Environment and was unable to reproduce.\n\
           \n\
           ALM Priority: Blocker\n\
           \n\
           iOS ONLY\n\
           iPhone 7+;iPhone X\n\
           \n\
           Expected:\n\
           When selecting \"Contact\" on the Login screen the Contact page \
           displays. (also from the Main Menu)\n\
           \n\
           Actual:\n\
           When selecting \"Contact\" on the Login screen the App crashes.\n\
           \n\
           Steps to recreate:\n\
           launch app\n\
           Select Contact\n\
           confirm app crashes\n\
           \n\
           **Note: i was successfully able to log in. The app only crashes \
           when you select \"Contact\"",
};

/// Time tracking figures.
pub static TIME_TRACKING: TicketContent = TicketContent {
    title: "Time Tracking",
    body: "Estimated Time: 16 hours\n\
           Remaining Time: 10 hours\n\
           Logged Time: 6 hours",
};
