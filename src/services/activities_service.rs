use tracing::{info, warn};

use crate::database::{ActivityDirectory, DirectorySnapshot};
use crate::errors::SignupError;
use crate::models::MessageResponse;

pub fn list_activities(directory: &ActivityDirectory) -> DirectorySnapshot {
    directory.list_activities()
}

pub fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    match directory.enroll(activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(MessageResponse { message })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    match directory.withdraw(activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(MessageResponse { message })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
