mod connectivity;
mod modes;
mod steps;
