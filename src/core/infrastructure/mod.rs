mod price_table_loader;
