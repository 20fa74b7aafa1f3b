pub mod app_layout;
pub mod city;
pub mod city_list;
pub mod country_list;
pub mod form;
pub mod home;
pub mod login;
pub mod map;
pub mod not_found;
pub mod pricing;
pub mod product;
