mod slot_repository;

pub use slot_repository::SlotRepository;
