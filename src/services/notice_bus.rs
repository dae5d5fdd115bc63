use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Notices on screen, oldest first, capped at a fixed length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeQueue {
    entries: VecDeque<(u32, Notice)>,
    next_id: u32,
    capacity: usize,
}

impl NoticeQueue {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Appends `notice`, dropping the oldest entries past capacity, and
    /// returns its id.
    pub fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push_back((id, notice));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        id
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn expire(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u32, Notice)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Browser timeout for a notice lifetime; saturates at `i32::MAX`.
pub fn timeout_ms(ttl_ms: u32) -> i32 {
    i32::try_from(ttl_ms).unwrap_or(i32::MAX)
}

/// Broadcasts every published [`Notice`] to all bridged components.
pub struct NoticeBus {
    link: AgentLink<NoticeBus>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for NoticeBus {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Notice;
    type Output = Notice;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, notice: Self::Input, _id: HandlerId) {
        for sub in self.subscribers.iter() {
            self.link.respond(*sub, notice.clone());
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
