pub mod a001_product;
pub mod a002_order;
pub mod a003_staff;
pub mod a004_payroll;
pub mod a005_inventory;
pub mod a006_theme;
pub mod a007_faq;
pub mod a008_job_posting;
pub mod a009_job_application;
pub mod a010_review;
pub mod a011_contact;
