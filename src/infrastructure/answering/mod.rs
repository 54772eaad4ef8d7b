pub mod remote;

use std::sync::Arc;

use crate::domain::models::ServiceBox;

pub struct ServiceManager {}

impl ServiceManager {
    pub fn get() -> ServiceBox {
        return Arc::<remote::Remote>::default();
    }
}
