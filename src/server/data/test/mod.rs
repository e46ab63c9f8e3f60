mod booking;
mod employee;
mod hostel;
mod payment;
mod room;
mod student;
mod transaction;
