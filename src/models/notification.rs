#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub read: bool,
}

/// In-memory notifications in insertion order. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationList {
    items: Vec<Notification>,
}

impl NotificationList {
    /// Unread notifications numbered from 1 in the given order.
    pub fn seeded<S: AsRef<str>>(texts: &[S]) -> Self {
        let items = texts
            .iter()
            .zip(1..)
            .map(|(text, id)| Notification {
                id,
                text: text.as_ref().to_owned(),
                read: false,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Unknown ids are ignored.
    pub fn mark_read(&mut self, id: u32) -> &[Notification] {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
        &self.items
    }

    pub fn mark_all_read(&mut self) -> &[Notification] {
        self.items.iter_mut().for_each(|n| n.read = true);
        &self.items
    }

    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: u32) -> &[Notification] {
        self.items.retain(|n| n.id != id);
        &self.items
    }

    pub fn clear_all(&mut self) -> &[Notification] {
        self.items.clear();
        &self.items
    }
}
