mod news_list;
