use async_trait::async_trait;
use travelease_core::repository::ContactRepository;
use travelease_core::CoreResult;
use travelease_shared::{ContactForm, NewContactForm};
use crate::memory::MemoryStore;

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn create_contact_form(&self, form: NewContactForm) -> CoreResult<ContactForm> {
        Ok(self.create(form))
    }

    async fn count_contact_forms(&self) -> CoreResult<usize> {
        Ok(self.count::<ContactForm>())
    }
}
