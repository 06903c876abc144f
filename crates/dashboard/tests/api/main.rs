mod helpers;

mod api;
mod dashboard;
mod fragments;
