pub use super::booking::Entity as Booking;
pub use super::employee::Entity as Employee;
pub use super::hostel::Entity as Hostel;
pub use super::payment::Entity as Payment;
pub use super::room::Entity as Room;
pub use super::student::Entity as Student;
pub use super::transaction::Entity as Transaction;
