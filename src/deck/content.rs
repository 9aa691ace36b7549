//! Static mock data shown on the slides
//!
//! None of this is computed. Every calendar, inbox and email on screen is a
//! hardcoded string defined here so the renderers stay layout-only.

/// A row in one of the hero calendar mockups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Ordinary booked meeting
    Busy,
    /// A meeting that collides with another one
    Conflict,
    /// The urgent meeting with no slot
    Unresolved,
    /// The urgent meeting after QUINN booked it
    Booked,
}

pub const HERO_TITLE: &str = "QUINN";
pub const HERO_TAGLINE_LEAD: &str = "Solving the ";
pub const HERO_TAGLINE_EMPHASIS: &str = "un-schedulable";
pub const HERO_FOOTER: &str = "Your intelligent Outlook scheduling assistant.";

pub const CALENDAR_BEFORE: &[CalendarEntry] = &[
    CalendarEntry { time: "9:00", title: "Team Sync", kind: EntryKind::Conflict },
    CalendarEntry { time: "9:30", title: "Vendor Call", kind: EntryKind::Conflict },
    CalendarEntry { time: "10:00", title: "Sprint Review", kind: EntryKind::Conflict },
    CalendarEntry { time: "???", title: "No slot for urgent mtg", kind: EntryKind::Unresolved },
    CalendarEntry { time: "11:00", title: "Client Call", kind: EntryKind::Busy },
    CalendarEntry { time: "14:00", title: "1:1 Review", kind: EntryKind::Busy },
];

pub const CALENDAR_AFTER: &[CalendarEntry] = &[
    CalendarEntry { time: "9:00", title: "Team Sync", kind: EntryKind::Busy },
    CalendarEntry { time: "10:00", title: "Sprint Review", kind: EntryKind::Busy },
    CalendarEntry { time: "11:00", title: "Client Call", kind: EntryKind::Busy },
    CalendarEntry { time: "13:00", title: "Urgent: Project Atlas", kind: EntryKind::Booked },
    CalendarEntry { time: "14:00", title: "1:1 Review", kind: EntryKind::Busy },
];

pub const CALENDAR_BEFORE_CAPTION: &str = "Conflicts & no availability";
pub const CALENDAR_AFTER_CAPTION: &str = "Resolved & booked automatically";

/// An email in the friction inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxEmail {
    pub from: &'static str,
    pub subject: &'static str,
    pub time: &'static str,
    pub preview: &'static str,
}

pub const FRICTION_TITLE: &str = "The Friction";
pub const FRICTION_SUBTITLE: &str = "Every urgent meeting triggers the same painful cycle";
pub const INBOX_UNREAD: &str = "47 unread";
pub const INBOX_FOOTER: &str = "12 emails exchanged over 3 days — still no meeting booked";

pub const INBOX: &[InboxEmail] = &[
    InboxEmail {
        from: "Sarah K.",
        subject: "Re: Re: Re: Meeting Time?",
        time: "2 min ago",
        preview: "Tuesday doesn't work for me either. What about Thursday?",
    },
    InboxEmail {
        from: "James R.",
        subject: "Re: Re: Re: Re: Meeting Time?",
        time: "18 min ago",
        preview: "I'm OOO Thursday. Can we try next week?",
    },
    InboxEmail {
        from: "You",
        subject: "Re: Re: Re: Re: Re: Meeting Time?",
        time: "45 min ago",
        preview: "How about Monday at 2pm? I'll also check with David...",
    },
    InboxEmail {
        from: "David L.",
        subject: "Re: Availability Check",
        time: "1 hr ago",
        preview: "Sorry, I have a conflicting call. Let me check my calendar...",
    },
];

/// A participant whose calendar hides the real reason they are busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenBlocker {
    pub person: &'static str,
    pub reason: &'static str,
}

pub const HIDDEN_BLOCKERS: &[HiddenBlocker] = &[
    HiddenBlocker { person: "Sarah K.", reason: "Private calendar — shows \"Busy\"" },
    HiddenBlocker { person: "James R.", reason: "OOO not visible to organizer" },
    HiddenBlocker { person: "External VP", reason: "No org-level calendar access" },
];

pub const TIME_WASTED_HOURS: &str = "3.2";
pub const TIME_WASTED_CAPTION: &str = "hrs avg. per scheduling attempt";
pub const ADMIN_SHARE_NOTE: &str = "78% of admin time spent on scheduling logistics";

pub const PROMPT_TITLE: &str = "Prompt-to-Action";
pub const PROMPT_SUBTITLE: &str = "One sentence. That's all it takes.";
pub const PROMPT_TEXT: &str =
    "Please schedule an urgent meeting with Sarah K., James R., and VP David in the next 48 hours.";
pub const PROMPT_PLACEHOLDER: &str = "Message QUINN...";

/// One stage of the architecture flow on the Logic slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStage {
    pub label: &'static str,
    pub detail: &'static str,
    pub accent: Accent,
}

/// Accent colours shared by the logic and impact slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Blue,
    Violet,
    Cyan,
    Amber,
}

pub const LOGIC_TITLE_LEAD: &str = "The ";
pub const LOGIC_TITLE_EMPHASIS: &str = "\"Brain\"";
pub const LOGIC_SUBTITLE: &str = "How QUINN orchestrates scheduling in seconds";

pub const FLOW_STAGES: &[FlowStage] = &[
    FlowStage {
        label: "Natural Language Prompt",
        detail: "\"Schedule urgent meeting with XYZ in 48h\"",
        accent: Accent::Emerald,
    },
    FlowStage {
        label: "Intent & Entity Extraction",
        detail: "Participants, urgency, time window",
        accent: Accent::Blue,
    },
    FlowStage {
        label: "Internal Calendar Check",
        detail: "Outlook Graph API — Free/Busy lookup",
        accent: Accent::Violet,
    },
    FlowStage {
        label: "External Availability",
        detail: "Cross-org calendar federation",
        accent: Accent::Cyan,
    },
    FlowStage {
        label: "Slot Matching Engine",
        detail: "Find overlapping free windows",
        accent: Accent::Amber,
    },
];

/// Outcome of the slot matching branch: (tag, action, detail)
pub const BRANCH_FOUND: (&str, &str, &str) =
    ("SLOT FOUND", "Auto-Book", "Send calendar invites to all participants");
pub const BRANCH_BLOCKED: (&str, &str, &str) =
    ("NO SLOT", "Escalate", "Draft urgent request to the blocker");

pub const LOGIC_BADGES: &[&str] = &["Microsoft Graph API", "OAuth 2.0 Secured", "Real-time Processing"];

/// One step of the escalation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStep {
    pub label: &'static str,
    pub detail: &'static str,
}

pub const ESCALATION_KICKER: &str = "Unique Selling Point";
pub const ESCALATION_TITLE: &str = "Escalation";
pub const ESCALATION_SUBTITLE: &str = "QUINN doesn't give up. It escalates intelligently.";
pub const ESCALATION_LOOP_NOTE: &str = "Loop repeats automatically until the meeting is booked";

pub const ESCALATION_LOOP: &[LoopStep] = &[
    LoopStep { label: "Search for Available Slots", detail: "Query all participants' calendars" },
    LoopStep { label: "No Common Slot Found", detail: "All windows are blocked" },
    LoopStep { label: "Identify the Blocker", detail: "Determine who is blocking the meeting" },
    LoopStep {
        label: "Draft & Send Escalation Email",
        detail: "Automated \"Urgent Request\" with suggested slots",
    },
    LoopStep { label: "Monitor & Re-check", detail: "Wait for response, then re-scan calendars" },
    LoopStep { label: "Slot Unlocked — Book It", detail: "Auto-send invites once a window opens" },
];

/// Index into [`ESCALATION_LOOP`] of the step that sends the email
pub const ESCALATION_SEND_STEP: usize = 3;

pub const ESCALATION_CLOSING: &str = "Traditional schedulers stop at \"no availability found.\" \
QUINN actively negotiates on your behalf — turning a dead-end into a resolved meeting.";

/// The escalation email revealed at the end of the live demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailPreview {
    pub window_title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub subject_tag: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub slots: &'static [&'static str],
    pub action: &'static str,
}

pub const ESCALATION_EMAIL: EmailPreview = EmailPreview {
    window_title: "Outlook — New Message (Auto-generated)",
    from: "QUINN <quinn@company.com>",
    to: "Sarah K. <sarah.k@company.com>",
    subject_tag: "[URGENT]",
    subject: "Meeting Request — Project Atlas",
    body: "Hi Sarah, an urgent meeting for Project Atlas is needed within 48h, \
but your calendar is the current blocker.",
    slots: &["Tue, Jan 14 — 2:00 PM", "Wed, Jan 15 — 10:00 AM", "Wed, Jan 15 — 4:00 PM"],
    action: "Reorganize My Schedule",
};

/// A headline number on the Impact slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    pub accent: Accent,
}

pub const IMPACT_TITLE_LEAD: &str = "The ";
pub const IMPACT_TITLE_EMPHASIS: &str = "Impact";
pub const IMPACT_SUBTITLE: &str = "Measurable outcomes from day one";
pub const IMPACT_TAGLINE: &str = "Stop scheduling. Start delegating to QUINN.";

pub const METRICS: &[Metric] = &[
    Metric {
        label: "Faster Decisions",
        value: "10x",
        detail: "Meetings booked in minutes, not days",
        accent: Accent::Emerald,
    },
    Metric {
        label: "Reduced Admin Load",
        value: "85%",
        detail: "Less time spent on scheduling logistics",
        accent: Accent::Blue,
    },
    Metric {
        label: "Prioritized Urgency",
        value: "100%",
        detail: "Urgent meetings always get escalated and resolved",
        accent: Accent::Amber,
    },
];

pub const BENEFITS: &[&str] = &[
    "No more email ping-pong for scheduling",
    "Cross-organizational calendar intelligence",
    "Automatic escalation for urgent blockers",
    "Seamless integration with Microsoft Outlook",
    "AI-powered conflict resolution",
];

/// A before/after comparison bar pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub label: &'static str,
    pub before: (&'static str, f64),
    pub after: (&'static str, f64),
}

pub const COMPARISONS: &[Comparison] = &[
    Comparison {
        label: "Time to Book a Meeting",
        before: ("3.2 hrs", 0.90),
        after: ("4 min", 0.08),
    },
    Comparison {
        label: "Emails Per Scheduling Task",
        before: ("12+ emails", 0.85),
        after: ("0–1 email", 0.05),
    },
];
