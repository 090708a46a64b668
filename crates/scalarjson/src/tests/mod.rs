
mod property_numbers;
